//! Statement lists and commands.
//!
//! A statement list is cut into big blocks: a run of simple commands,
//! optionally labeled, closed by a structured command (`if`, `while`,
//! `break`) or a transfer (`goto`, `return`). A label closes the open block
//! and starts a new one. Whatever is still open at `}` becomes the final
//! block, and an empty list gets one empty block at the closing brace.

use bpl_diagnostic::SyntaxError;
use bpl_ir::ast::{
    AssignLhs, Attribute, BigBlock, BlockTail, BreakCmd, CallCmd, Cmd, CmdKind, ElseBranch, Expr,
    Ident, IfCmd, Invariant, StmtList, StructuredCmd, TransferCmd, TransferKind, WhileCmd,
};
use bpl_ir::{Span, TokenKind};

use crate::recovery::{synchronize, CMD_START, EXPR_START, STMT_SYNC};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

/// A label or a simple command.
pub(crate) enum LabelOrCmd {
    Label(Ident),
    Cmd(Cmd),
}

/// The big block under construction.
struct OpenBlock {
    span: Span,
    label: Option<String>,
    cmds: Vec<Cmd>,
}

impl OpenBlock {
    fn new(span: Span, label: Option<String>) -> Self {
        OpenBlock {
            span,
            label,
            cmds: Vec::new(),
        }
    }

    fn close(self, tail: Option<BlockTail>) -> BigBlock {
        BigBlock {
            span: self.span,
            label: self.label,
            cmds: self.cmds,
            tail,
        }
    }
}

impl Parser<'_> {
    /// Statements up to and including the closing `}`. The opening brace has
    /// already been consumed.
    pub(crate) fn parse_stmt_list(&mut self) -> StmtList {
        ensure_sufficient_stack(|| self.parse_stmt_list_inner())
    }

    fn parse_stmt_list_inner(&mut self) -> StmtList {
        let mut big_blocks = Vec::new();
        let mut open: Option<OpenBlock> = None;

        loop {
            let kind = self.current_kind();
            if CMD_START.contains(kind) {
                match self.parse_label_or_cmd() {
                    Some(LabelOrCmd::Cmd(cmd)) => {
                        let span = cmd.span;
                        open.get_or_insert_with(|| OpenBlock::new(span, None))
                            .cmds
                            .push(cmd);
                    }
                    Some(LabelOrCmd::Label(label)) => {
                        if let Some(block) = open.take() {
                            big_blocks.push(block.close(None));
                        }
                        open = Some(OpenBlock::new(label.span, Some(label.name)));
                    }
                    None => {}
                }
            } else if matches!(kind, TokenKind::If | TokenKind::While | TokenKind::Break) {
                let cmd = self.parse_structured_cmd();
                let block = open
                    .take()
                    .unwrap_or_else(|| OpenBlock::new(cmd.span(), None));
                big_blocks.push(block.close(Some(BlockTail::Structured(cmd))));
            } else if matches!(kind, TokenKind::Goto | TokenKind::Return) {
                let cmd = self.parse_transfer_cmd();
                let block = open.take().unwrap_or_else(|| OpenBlock::new(cmd.span, None));
                big_blocks.push(block.close(Some(BlockTail::Transfer(cmd))));
            } else if STMT_SYNC.contains(kind) {
                break;
            } else {
                self.syntax_error(SyntaxError::Invalid("StmtList"));
                synchronize(&mut self.cursor, STMT_SYNC.with(TokenKind::Semicolon));
                self.eat(TokenKind::Semicolon);
            }
        }

        let end = self.current_span();
        self.expect(TokenKind::RBrace);
        match open {
            Some(block) => big_blocks.push(block.close(None)),
            None if big_blocks.is_empty() => big_blocks.push(OpenBlock::new(end, None).close(None)),
            None => {}
        }
        StmtList { big_blocks, end }
    }

    /// One label or simple command. `None` after a reported error.
    pub(crate) fn parse_label_or_cmd(&mut self) -> Option<LabelOrCmd> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Ident => return self.parse_label_or_assign(),
            TokenKind::Assert | TokenKind::Assume => {
                let is_assert = self.check(TokenKind::Assert);
                self.advance();
                let attributes = self.parse_attributes();
                let expr = self.parse_expression();
                self.expect(TokenKind::Semicolon);
                if is_assert {
                    CmdKind::Assert { expr, attributes }
                } else {
                    CmdKind::Assume { expr, attributes }
                }
            }
            TokenKind::Havoc => {
                self.advance();
                let vars = self.parse_idents();
                self.expect(TokenKind::Semicolon);
                CmdKind::Havoc { vars }
            }
            TokenKind::Async | TokenKind::Free | TokenKind::Call => {
                let call = self.parse_call_cmd();
                self.expect(TokenKind::Semicolon);
                CmdKind::Call(call)
            }
            TokenKind::Par => self.parse_par_call(),
            TokenKind::Yield => {
                self.advance();
                self.expect(TokenKind::Semicolon);
                CmdKind::Yield
            }
            _ => {
                self.syntax_error(SyntaxError::Invalid("LabelOrCmd"));
                return None;
            }
        };
        Some(LabelOrCmd::Cmd(Cmd {
            kind,
            span: self.span_from(start),
        }))
    }

    /// `Ident ":"` or `Lhs {"," Lhs} ":=" Expressions ";"`
    fn parse_label_or_assign(&mut self) -> Option<LabelOrCmd> {
        let id = self.expect_ident();
        if self.eat(TokenKind::Colon) {
            return Some(LabelOrCmd::Label(id));
        }
        if !matches!(
            self.current_kind(),
            TokenKind::Comma | TokenKind::LBracket | TokenKind::Assign
        ) {
            self.syntax_error(SyntaxError::Invalid("LabelOrAssign"));
            return None;
        }

        let start = id.span;
        let mut lhss = vec![self.parse_assign_lhs(id)];
        while self.eat(TokenKind::Comma) {
            let id = self.expect_ident();
            lhss.push(self.parse_assign_lhs(id));
        }
        self.expect(TokenKind::Assign);
        let rhss = self.parse_expressions();
        self.expect(TokenKind::Semicolon);
        Some(LabelOrCmd::Cmd(Cmd {
            kind: CmdKind::Assign { lhss, rhss },
            span: self.span_from(start),
        }))
    }

    /// `Ident {"[" [Expressions] "]"}`, the identifier already consumed.
    fn parse_assign_lhs(&mut self, id: Ident) -> AssignLhs {
        let start = id.span;
        let mut lhs = AssignLhs::Simple(id);
        while self.eat(TokenKind::LBracket) {
            let indexes = self.parse_opt_expressions();
            self.expect(TokenKind::RBracket);
            lhs = AssignLhs::Map {
                map: Box::new(lhs),
                indexes,
                span: self.span_from(start),
            };
        }
        lhs
    }

    /// `["async"] ["free"] "call" {Attribute} CallParams`
    fn parse_call_cmd(&mut self) -> CallCmd {
        let start = self.current_span();
        let is_async = self.eat(TokenKind::Async);
        let is_free = self.eat(TokenKind::Free);
        self.expect(TokenKind::Call);
        let attributes = self.parse_attributes();
        self.parse_call_params(is_async, is_free, attributes, start)
    }

    /// `"par" {Attribute} CallParams {"|" CallParams} ";"`
    fn parse_par_call(&mut self) -> CmdKind {
        let start = self.advance().span;
        let attributes = self.parse_attributes();
        let mut calls = vec![self.parse_call_params(false, false, attributes.clone(), start)];
        while self.eat(TokenKind::Pipe) {
            let member_start = self.current_span();
            calls.push(self.parse_call_params(false, false, attributes.clone(), member_start));
        }
        self.expect(TokenKind::Semicolon);
        CmdKind::ParCall { calls, attributes }
    }

    /// `Ident "(" [Expressions] ")"` or
    /// `Ident {"," Ident} ":=" Ident "(" [Expressions] ")"`
    fn parse_call_params(
        &mut self,
        is_async: bool,
        is_free: bool,
        attributes: Vec<Attribute>,
        start: Span,
    ) -> CallCmd {
        let first = self.expect_ident();
        let mut outs = Vec::new();
        let mut ins = Vec::new();

        let callee = if self.eat(TokenKind::LParen) {
            ins = self.parse_opt_expressions();
            self.expect(TokenKind::RParen);
            first
        } else if matches!(self.current_kind(), TokenKind::Comma | TokenKind::Assign) {
            outs.push(first);
            while self.eat(TokenKind::Comma) {
                outs.push(self.expect_ident());
            }
            self.expect(TokenKind::Assign);
            let callee = self.expect_ident();
            self.expect(TokenKind::LParen);
            ins = self.parse_opt_expressions();
            self.expect(TokenKind::RParen);
            callee
        } else {
            self.syntax_error(SyntaxError::Invalid("CallParams"));
            first
        };

        CallCmd {
            is_async,
            is_free,
            callee,
            ins,
            outs,
            attributes,
            span: self.span_from(start),
        }
    }

    fn parse_structured_cmd(&mut self) -> StructuredCmd {
        match self.current_kind() {
            TokenKind::If => StructuredCmd::If(self.parse_if_cmd()),
            TokenKind::While => StructuredCmd::While(self.parse_while_cmd()),
            _ => StructuredCmd::Break(self.parse_break_cmd()),
        }
    }

    /// `"if" Guard "{" StmtList ["else" (IfCmd | "{" StmtList)]`
    fn parse_if_cmd(&mut self) -> IfCmd {
        let start = self.current_span();
        self.expect(TokenKind::If);
        let guard = self.parse_guard();
        self.expect(TokenKind::LBrace);
        let then_branch = self.parse_stmt_list();
        let else_branch = if self.eat(TokenKind::Else) {
            if self.check(TokenKind::If) {
                let nested = ensure_sufficient_stack(|| self.parse_if_cmd());
                Some(ElseBranch::If(Box::new(nested)))
            } else if self.eat(TokenKind::LBrace) {
                Some(ElseBranch::Block(self.parse_stmt_list()))
            } else {
                self.syntax_error(SyntaxError::Invalid("IfCmd"));
                None
            }
        } else {
            None
        };
        IfCmd {
            guard,
            then_branch,
            else_branch,
            span: self.span_from(start),
        }
    }

    /// `"while" Guard {["free"] "invariant" {Attribute} Expression ";"} "{" StmtList`
    fn parse_while_cmd(&mut self) -> WhileCmd {
        let start = self.advance().span;
        let guard = self.parse_guard();
        let mut invariants = Vec::new();
        while self.check(TokenKind::Free) || self.check(TokenKind::Invariant) {
            let inv_start = self.current_span();
            let free = self.eat(TokenKind::Free);
            self.expect(TokenKind::Invariant);
            let attributes = self.parse_attributes();
            let expr = self.parse_expression();
            self.expect(TokenKind::Semicolon);
            invariants.push(Invariant {
                free,
                expr,
                attributes,
                span: self.span_from(inv_start),
            });
        }
        self.expect(TokenKind::LBrace);
        let body = self.parse_stmt_list();
        WhileCmd {
            guard,
            invariants,
            body,
            span: self.span_from(start),
        }
    }

    /// `"break" [Ident] ";"`
    fn parse_break_cmd(&mut self) -> BreakCmd {
        let start = self.advance().span;
        let label = if self.check(TokenKind::Ident) {
            Some(self.expect_ident().name)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon);
        BreakCmd {
            label,
            span: self.span_from(start),
        }
    }

    /// `"(" ("*" | Expression) ")"`. `*` is a nondeterministic choice.
    fn parse_guard(&mut self) -> Option<Expr> {
        self.expect(TokenKind::LParen);
        let guard = if self.eat(TokenKind::Star) {
            None
        } else if EXPR_START.contains(self.current_kind()) {
            Some(self.parse_expression())
        } else {
            self.syntax_error(SyntaxError::Invalid("Guard"));
            None
        };
        self.expect(TokenKind::RParen);
        guard
    }

    /// `"goto" Idents ";"` or `"return" ";"`
    fn parse_transfer_cmd(&mut self) -> TransferCmd {
        let start = self.current_span();
        let kind = if self.eat(TokenKind::Goto) {
            TransferKind::Goto(self.parse_idents())
        } else {
            self.expect(TokenKind::Return);
            TransferKind::Return
        };
        self.expect(TokenKind::Semicolon);
        TransferCmd {
            kind,
            span: self.span_from(start),
        }
    }
}
