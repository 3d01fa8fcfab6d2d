//! Bodies, statement lists and commands.

use bpl_ir::ast::{
    AssignLhs, BigBlock, BlockTail, CallCmd, Cmd, CmdKind, ElseBranch, Expr, IfCmd, StmtList,
    StructuredCmd, TransferCmd, TransferKind, Variable, WhileCmd,
};

use super::Printer;
use crate::emitter::Emitter;

impl<E: Emitter> Printer<E> {
    /// `{ locals statements }`, closing brace on its own line.
    pub(super) fn body(&mut self, locals: &[Variable], stmts: &StmtList) {
        self.text("{");
        self.newline();
        self.indented(|p| {
            for local in locals {
                p.line();
                p.var_decl(local);
                p.newline();
            }
            p.stmt_list(stmts);
        });
        self.line();
        self.text("}");
    }

    /// Block contents at the current depth, one entry per line.
    fn stmt_list(&mut self, stmts: &StmtList) {
        for block in &stmts.big_blocks {
            self.big_block(block);
        }
    }

    fn big_block(&mut self, block: &BigBlock) {
        if let Some(label) = &block.label {
            self.line();
            self.ident(label);
            self.text(":");
            self.newline();
        }
        for cmd in &block.cmds {
            self.line();
            self.cmd(cmd);
            self.newline();
        }
        match &block.tail {
            Some(BlockTail::Structured(cmd)) => {
                self.line();
                self.structured(cmd);
                self.newline();
            }
            Some(BlockTail::Transfer(cmd)) => {
                self.line();
                self.transfer(cmd);
                self.newline();
            }
            None => {}
        }
    }

    /// A nested `{ ... }` whose closing brace lines up with the current line.
    fn nested_block(&mut self, stmts: &StmtList) {
        self.text("{");
        self.newline();
        self.indented(|p| p.stmt_list(stmts));
        self.line();
        self.text("}");
    }

    /// One simple command, without line handling.
    pub(super) fn cmd(&mut self, cmd: &Cmd) {
        match &cmd.kind {
            CmdKind::Assign { lhss, rhss } => {
                self.comma_list(lhss, |p, lhs| p.assign_lhs(lhs));
                self.text(" := ");
                self.comma_list(rhss, |p, e| p.expr(e));
                self.text(";");
            }
            CmdKind::Assert { expr, attributes } => {
                self.text("assert ");
                self.attributes(attributes);
                self.expr(expr);
                self.text(";");
            }
            CmdKind::Assume { expr, attributes } => {
                self.text("assume ");
                self.attributes(attributes);
                self.expr(expr);
                self.text(";");
            }
            CmdKind::Havoc { vars } => {
                self.text("havoc ");
                self.idents(vars.iter().map(|v| v.name.as_str()));
                self.text(";");
            }
            CmdKind::Call(call) => {
                if call.is_async {
                    self.text("async ");
                }
                if call.is_free {
                    self.text("free ");
                }
                self.text("call ");
                self.attributes(&call.attributes);
                self.call_params(call);
                self.text(";");
            }
            CmdKind::ParCall { calls, attributes } => {
                self.text("par ");
                self.attributes(attributes);
                for (i, call) in calls.iter().enumerate() {
                    if i > 0 {
                        self.text(" | ");
                    }
                    self.call_params(call);
                }
                self.text(";");
            }
            CmdKind::Yield => self.text("yield;"),
        }
    }

    fn assign_lhs(&mut self, lhs: &AssignLhs) {
        match lhs {
            AssignLhs::Simple(id) => self.ident(&id.name),
            AssignLhs::Map { map, indexes, .. } => {
                self.assign_lhs(map);
                self.text("[");
                self.comma_list(indexes, |p, e| p.expr(e));
                self.text("]");
            }
        }
    }

    /// `[outs :=] callee(ins)`
    fn call_params(&mut self, call: &CallCmd) {
        if !call.outs.is_empty() {
            self.idents(call.outs.iter().map(|o| o.name.as_str()));
            self.text(" := ");
        }
        self.ident(&call.callee.name);
        self.text("(");
        self.comma_list(&call.ins, |p, e| p.expr(e));
        self.text(")");
    }

    fn structured(&mut self, cmd: &StructuredCmd) {
        match cmd {
            StructuredCmd::If(if_cmd) => self.if_cmd(if_cmd),
            StructuredCmd::While(while_cmd) => self.while_cmd(while_cmd),
            StructuredCmd::Break(b) => {
                self.text("break");
                if let Some(label) = &b.label {
                    self.space();
                    self.ident(label);
                }
                self.text(";");
            }
        }
    }

    fn guard(&mut self, guard: Option<&Expr>) {
        self.text("(");
        match guard {
            Some(e) => self.expr(e),
            None => self.text("*"),
        }
        self.text(")");
    }

    fn if_cmd(&mut self, if_cmd: &IfCmd) {
        self.text("if ");
        self.guard(if_cmd.guard.as_ref());
        self.space();
        self.nested_block(&if_cmd.then_branch);
        match &if_cmd.else_branch {
            Some(ElseBranch::If(nested)) => {
                self.text(" else ");
                self.if_cmd(nested);
            }
            Some(ElseBranch::Block(stmts)) => {
                self.text(" else ");
                self.nested_block(stmts);
            }
            None => {}
        }
    }

    fn while_cmd(&mut self, while_cmd: &WhileCmd) {
        self.text("while ");
        self.guard(while_cmd.guard.as_ref());
        if while_cmd.invariants.is_empty() {
            self.space();
        } else {
            self.indented(|p| {
                for inv in &while_cmd.invariants {
                    p.newline();
                    p.line();
                    if inv.free {
                        p.text("free ");
                    }
                    p.text("invariant ");
                    p.attributes(&inv.attributes);
                    p.expr(&inv.expr);
                    p.text(";");
                }
            });
            self.newline();
            self.line();
        }
        self.nested_block(&while_cmd.body);
    }

    pub(super) fn transfer(&mut self, cmd: &TransferCmd) {
        match &cmd.kind {
            TransferKind::Goto(targets) => {
                self.text("goto ");
                self.idents(targets.iter().map(|t| t.name.as_str()));
                self.text(";");
            }
            TransferKind::Return => self.text("return;"),
            TransferKind::ReturnExpr(e) => {
                self.text("return ");
                self.expr(e);
                self.text(";");
            }
        }
    }
}
