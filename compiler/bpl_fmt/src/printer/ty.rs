use bpl_ir::ast::{Type, TypeKind, TypeVariable};

use super::Printer;
use crate::emitter::Emitter;

impl<E: Emitter> Printer<E> {
    pub fn ty(&mut self, ty: &Type) {
        match &ty.kind {
            TypeKind::Basic(basic) => self.text(basic.as_str()),
            TypeKind::Bv(width) => self.text(&format!("bv{width}")),
            TypeKind::Var(name) => self.ident(name),
            TypeKind::Unresolved { name, args } => {
                self.ident(name);
                for arg in args {
                    self.space();
                    self.type_arg(arg);
                }
            }
            TypeKind::Map(map) => {
                if !map.type_params.is_empty() {
                    self.type_params(&map.type_params);
                }
                self.text("[");
                self.comma_list(&map.args, |p, t| p.ty(t));
                self.text("]");
                self.ty(&map.result);
            }
        }
    }

    /// Constructor arguments that are themselves applied or are maps get
    /// parentheses.
    fn type_arg(&mut self, ty: &Type) {
        let compound = match &ty.kind {
            TypeKind::Unresolved { args, .. } => !args.is_empty(),
            TypeKind::Map(_) => true,
            _ => false,
        };
        if compound {
            self.text("(");
            self.ty(ty);
            self.text(")");
        } else {
            self.ty(ty);
        }
    }

    pub(super) fn type_params(&mut self, params: &[TypeVariable]) {
        self.text("<");
        self.idents(params.iter().map(|tv| tv.name.as_str()));
        self.text(">");
    }
}
