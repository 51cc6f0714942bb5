//! Expression rendering.
//!
//! An expression subtree is flattened into [`Token`]s by a [`Visitor`] and the tokens are joined with single spaces.
//! Operators stay typed ([`OperatorId`]) until the final join, where each one is replaced by its Java spelling; text
//! tokens (identifiers, literals) are never inspected, so operator translation cannot touch them.
//!
//! | node               | rendering                                   |
//! |--------------------|---------------------------------------------|
//! | unary              | `op ( operand )`                            |
//! | binary             | `( left op right )`                         |
//! | instance/variable  | id after the member rule                    |
//! | enum value         | the value                                   |
//! | constant           | literal text                                |
//! | robot-at-position  | position instance id, or `<unknown position>` |

use std::borrow::Cow;

use cellgen_core::lang::literals;
use cellgen_core::lang::operators::{self, OperatorId};
use cellgen_core::qualified_id;
use cellgen_syntax::ast::*;
use cellgen_syntax::visit::{self, UnknownNode, VisitControl, Visitor};
use serde_json::Value;

use super::context::GenerationContext;
use crate::diagnostics::{Warning, WarningKind};

/// One element of a flattened expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Operator(OperatorId),
    Open,
    Close,
}

impl Token {
    pub fn as_java(&self) -> Cow<'_, str> {
        match self {
            Token::Text(text) => Cow::Borrowed(text),
            Token::Operator(id) => Cow::Borrowed(operators::java_spelling(*id)),
            Token::Open => Cow::Borrowed("("),
            Token::Close => Cow::Borrowed(")"),
        }
    }
}

/// Collects the tokens of an expression, recording members into the context as references are met.
pub struct ExpressionRenderer<'c> {
    ctx: &'c mut GenerationContext,
    tokens: Vec<Token>,
}

impl<'c> ExpressionRenderer<'c> {
    pub fn new(ctx: &'c mut GenerationContext) -> Self {
        Self { ctx, tokens: Vec::new() }
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn text(&mut self, text: impl Into<String>) {
        self.tokens.push(Token::Text(text.into()));
    }

    fn reference(&mut self, id: &str) {
        let path = self.ctx.member_path(id).to_string();
        self.text(path);
    }
}

impl<'ast> Visitor<'ast> for ExpressionRenderer<'_> {
    fn visit_unknown_node(&mut self, node: UnknownNode) {
        self.ctx.warn(Warning::new(
            WarningKind::UnknownNode,
            format!("{node:?} of unknown kind rendered as nothing"),
        ));
    }

    fn enter_unary_expression(&mut self, expr: &'ast UnaryExpression) -> VisitControl {
        self.tokens.push(Token::Operator(expr.operator.id()));
        self.tokens.push(Token::Open);
        VisitControl::Continue
    }

    fn leave_unary_expression(&mut self, _expr: &'ast UnaryExpression) {
        self.tokens.push(Token::Close);
    }

    fn enter_binary_expression(&mut self, expr: &'ast BinaryExpression) -> VisitControl {
        // The operator sits between the operands, so the children are walked here.
        self.tokens.push(Token::Open);
        visit::walk_expression(self, &expr.left);
        self.tokens.push(Token::Operator(expr.operator.id()));
        visit::walk_expression(self, &expr.right);
        self.tokens.push(Token::Close);
        VisitControl::SkipChildren
    }

    fn enter_const_expression(&mut self, expr: &'ast ConstExpression) -> VisitControl {
        self.text(const_text(&expr.value, expr.type_id.as_deref()));
        VisitControl::Continue
    }

    fn enter_enum_value(&mut self, expr: &'ast EnumValue) -> VisitControl {
        self.text(expr.value.as_str());
        VisitControl::Continue
    }

    fn enter_instance_reference(&mut self, expr: &'ast InstanceReference) -> VisitControl {
        self.reference(&expr.instance_id);
        VisitControl::Continue
    }

    fn enter_variable_reference(&mut self, expr: &'ast VariableReference) -> VisitControl {
        self.reference(&expr.variable_id);
        VisitControl::Continue
    }

    fn enter_robot_at_position(&mut self, expr: &'ast RobotAtPosition) -> VisitControl {
        match &expr.value {
            Some(position) => self.reference(&position.instance_id),
            None => self.text(literals::UNKNOWN_POSITION),
        }
        VisitControl::Continue
    }

    fn enter_expression_placeholder(&mut self, placeholder: &'ast Placeholder) -> VisitControl {
        self.ctx
            .warn_placeholder("expression", placeholder.severity, &placeholder.meta.id);
        VisitControl::Continue
    }
}

/// Flatten an expression into tokens.
pub fn tokenize(ctx: &mut GenerationContext, expr: &Expression) -> Vec<Token> {
    let mut renderer = ExpressionRenderer::new(ctx);
    visit::walk_expression(&mut renderer, expr);
    renderer.into_tokens()
}

/// Render an expression as a single line of Java.
pub fn render_expression(ctx: &mut GenerationContext, expr: &Expression) -> String {
    join_tokens(&tokenize(ctx, expr))
}

pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_java).collect::<Vec<_>>().join(" ")
}

/// Literal text of a constant.
///
/// String values are quoted only when the declared type is a string type; otherwise they are emitted verbatim (they
/// usually carry Java expressions or identifiers typed by the user).
pub fn const_text(value: &Value, type_id: Option<&str>) -> String {
    match value {
        Value::String(s) => {
            let is_string = type_id
                .map(qualified_id::simple_name)
                .is_some_and(literals::is_string_type);
            if is_string {
                literals::java_string_literal(s)
            } else {
                s.clone()
            }
        }
        Value::Null => literals::NULL.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expr(value: Value) -> Expression {
        serde_json::from_value(value).unwrap()
    }

    fn instance(id: &str) -> Value {
        json!({"kind": "instance", "instanceId": id})
    }

    #[test]
    fn binary_is_parenthesized_with_java_operator() {
        let e = expr(json!({"kind": "binary", "operator": "and", "left": instance("a"), "right": instance("b")}));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "( a && b )");
    }

    #[test]
    fn unary_wraps_operand() {
        let e = expr(json!({"kind": "unary", "operator": "not", "operand": instance("c")}));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "! ( c )");
    }

    #[test]
    fn nested_condition_matches_reference_layout() {
        let e = expr(json!({
            "kind": "binary", "operator": "&",
            "left": {"kind": "binary", "operator": "|", "left": instance("a"), "right": instance("b")},
            "right": {"kind": "unary", "operator": "!", "operand": instance("c")}
        }));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "( ( a || b ) && ! ( c ) )");
    }

    #[test]
    fn identifiers_that_look_like_operators_are_untouched() {
        let e = expr(json!({
            "kind": "binary", "operator": "eq",
            "left": {"kind": "variable", "variableId": "and"},
            "right": {"kind": "const", "value": "or"}
        }));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "( and == or )");
    }

    #[test]
    fn references_apply_member_rule() {
        let e = expr(json!({"kind": "binary", "operator": "gt",
            "left": instance("Robot1.speed"), "right": {"kind": "const", "value": 10}}));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "( speed > 10 )");
        assert_eq!(ctx.members().collect::<Vec<_>>(), vec!["Robot1"]);
    }

    #[test]
    fn robot_at_position_without_value() {
        let e = expr(json!({"kind": "robotAtPos"}));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "<unknown position>");
    }

    #[test]
    fn robot_at_position_uses_instance() {
        let e = expr(json!({"kind": "robotAtPos", "value": {"kind": "instance", "instanceId": "cell.ParkPos"}}));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "ParkPos");
        assert_eq!(ctx.members().collect::<Vec<_>>(), vec!["cell"]);
    }

    #[test]
    fn enum_value_renders_value_only() {
        let e = expr(json!({"kind": "enum", "typeId": "types.Mode", "value": "FAST"}));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "FAST");
    }

    #[test]
    fn string_typed_constants_are_quoted() {
        assert_eq!(const_text(&json!("hi \"x\""), Some("lang.String")), r#""hi \"x\"""#);
        assert_eq!(const_text(&json!("speed * 2"), None), "speed * 2");
        assert_eq!(const_text(&json!(2.5), Some("lang.Real")), "2.5");
        assert_eq!(const_text(&json!(true), None), "true");
        assert_eq!(const_text(&Value::Null, None), "null");
    }

    #[test]
    fn placeholder_renders_nothing_and_warns() {
        let e = expr(json!({"kind": "expression_placeholder", "id": "ph", "severity": "error"}));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "");
        assert_eq!(ctx.warnings().len(), 1);
        assert_eq!(ctx.warnings()[0].kind, WarningKind::Placeholder);
    }

    #[test]
    fn unknown_expression_warns() {
        let e = expr(json!({"kind": "lambda"}));
        let mut ctx = GenerationContext::new();
        assert_eq!(render_expression(&mut ctx, &e), "");
        assert_eq!(ctx.warnings()[0].kind, WarningKind::UnknownNode);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let e = expr(json!({"kind": "binary", "operator": "lte",
            "left": instance("a.b"), "right": {"kind": "const", "value": -1}}));
        let mut ctx = GenerationContext::new();
        let first = render_expression(&mut ctx, &e);
        let second = render_expression(&mut ctx, &e);
        assert_eq!(first, second);
        assert_eq!(ctx.members().len(), 1);
    }
}
