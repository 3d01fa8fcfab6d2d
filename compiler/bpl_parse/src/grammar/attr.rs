//! Attributes and triggers.
//!
//! Both are written `{ ... }`. A colon right after the brace makes it a
//! named attribute `{:key p, ...}`; anything else is a trigger. The key
//! `nopats` is folded into the trigger list as a negative pattern.

use bpl_diagnostic::SyntaxError;
use bpl_ir::ast::{AttrParam, Attribute, Trigger};
use bpl_ir::TokenKind;

use crate::recovery::EXPR_START;
use crate::Parser;

impl Parser<'_> {
    /// One `{ ... }` group, appended to `attributes` or `triggers`.
    pub(crate) fn parse_attribute_or_trigger(
        &mut self,
        attributes: &mut Vec<Attribute>,
        triggers: &mut Vec<Trigger>,
    ) {
        let start = self.current_span();
        self.expect(TokenKind::LBrace);

        if self.eat(TokenKind::Colon) {
            let key = self.expect_ident();
            let mut params = Vec::new();
            if EXPR_START.contains(self.current_kind()) {
                params.push(self.parse_attr_param());
                while self.eat(TokenKind::Comma) {
                    params.push(self.parse_attr_param());
                }
            }
            self.expect(TokenKind::RBrace);
            let span = self.span_from(start);

            if key.name == "nopats" {
                let mut params = params.into_iter();
                match (params.next(), params.next()) {
                    (Some(AttrParam::Expr(expr)), None) => triggers.push(Trigger {
                        positive: false,
                        exprs: vec![expr],
                        span,
                    }),
                    _ => self.semantic_error(
                        "the 'nopats' quantifier attribute expects a single expression parameter",
                    ),
                }
            } else {
                attributes.push(Attribute {
                    key: key.name,
                    params,
                    span,
                });
            }
        } else if EXPR_START.contains(self.current_kind()) {
            let exprs = self.parse_expressions();
            self.expect(TokenKind::RBrace);
            triggers.push(Trigger {
                positive: true,
                exprs,
                span: self.span_from(start),
            });
        } else {
            self.syntax_error(SyntaxError::Invalid("AttributeOrTrigger"));
            self.expect(TokenKind::RBrace);
        }
    }

    /// A string literal or an expression.
    fn parse_attr_param(&mut self) -> AttrParam {
        if self.check(TokenKind::String) {
            let token = self.advance();
            AttrParam::String(strip_quotes(&token.text).to_string())
        } else {
            AttrParam::Expr(self.parse_expression())
        }
    }

    /// Zero or more `{:key ...}` groups where triggers are not accepted.
    pub(crate) fn parse_attributes(&mut self) -> Vec<Attribute> {
        let mut attributes = Vec::new();
        while self.check(TokenKind::LBrace) {
            let mut triggers = Vec::new();
            self.parse_attribute_or_trigger(&mut attributes, &mut triggers);
            if !triggers.is_empty() {
                self.semantic_error("only attributes, not triggers, allowed here");
            }
        }
        attributes
    }
}

/// Contents of a string literal token.
pub(crate) fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}
