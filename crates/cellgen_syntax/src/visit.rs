//! Traversal framework for the sequence node model.
//!
//! A [`Visitor`] overrides the `enter_*`/`leave_*` callbacks it cares about; every callback defaults to a no-op. The
//! `walk_*` functions drive the traversal:
//!
//! - `enter_*` runs before a node's children and returns [`VisitControl`]; [`VisitControl::SkipChildren`] prunes the
//!   subtree.
//! - `leave_*` runs after the children, or right after `enter_*` when the children were skipped.
//! - Children are visited in array order, so two traversals of the same tree produce the same callback sequence.
//! - A node of unknown kind calls [`Visitor::visit_unknown_node`] and is not descended into.
//!
//! Visitors that keep a stack (e.g. "which function am I in") push in `enter_*` and pop in `leave_*`; the pairing
//! holds even for skipped subtrees.
//!
//! ## Examples
//! ```rust
//! use cellgen_syntax::ast::{CallKind, CallStatement, Program};
//! use cellgen_syntax::visit::{self, VisitControl, Visitor};
//!
//! #[derive(Default)]
//! struct CallCounter(usize);
//!
//! impl<'ast> Visitor<'ast> for CallCounter {
//!     fn enter_call_statement(&mut self, _kind: CallKind, _call: &'ast CallStatement) -> VisitControl {
//!         self.0 += 1;
//!         VisitControl::Continue
//!     }
//! }
//!
//! let program: Program = serde_json::from_str(
//!     r#"{"id":"p","entryPoint":"main","definitions":[
//!         {"kind":"function","id":"main","statements":[{"kind":"functionCall","calleeId":"other"}]}
//!     ]}"#,
//! )
//! .unwrap();
//! let mut counter = CallCounter::default();
//! visit::walk_program(&mut counter, &program);
//! assert_eq!(counter.0, 1);
//! ```

use crate::ast::*;

/// Returned by every `enter_*` callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitControl {
    #[default]
    Continue,
    SkipChildren,
}

impl VisitControl {
    pub fn descends(self) -> bool {
        self == VisitControl::Continue
    }
}

/// Which enum an unknown node was decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnknownNode {
    Definition,
    Statement,
    Expression,
}

/// Callbacks for a traversal of the node model.
#[allow(unused_variables)]
pub trait Visitor<'ast> {
    /// Called for nodes whose `kind` the model does not know. Nothing below them is visited.
    fn visit_unknown_node(&mut self, node: UnknownNode) {}

    // --- program / definitions ----------------------------------------------

    fn enter_program(&mut self, program: &'ast Program) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_program(&mut self, program: &'ast Program) {}

    fn enter_function_definition(&mut self, function: &'ast FunctionDefinition) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_function_definition(&mut self, function: &'ast FunctionDefinition) {}

    fn enter_instance_definition(&mut self, instance: &'ast InstanceDefinition) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_instance_definition(&mut self, instance: &'ast InstanceDefinition) {}

    // --- statements ---------------------------------------------------------

    fn enter_call_statement(&mut self, kind: CallKind, call: &'ast CallStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_call_statement(&mut self, kind: CallKind, call: &'ast CallStatement) {}

    fn enter_wait_statement(&mut self, wait: &'ast WaitStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_wait_statement(&mut self, wait: &'ast WaitStatement) {}

    fn enter_condition_statement(&mut self, stmt: &'ast ConditionStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_condition_statement(&mut self, stmt: &'ast ConditionStatement) {}

    fn enter_conditional(&mut self, conditional: &'ast Conditional) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_conditional(&mut self, conditional: &'ast Conditional) {}

    /// Called before the `else` sequence of `stmt`; only when it has one.
    fn enter_otherwise(&mut self, stmt: &'ast ConditionStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_otherwise(&mut self, stmt: &'ast ConditionStatement) {}

    fn enter_loop_statement(&mut self, kind: LoopKind, stmt: &'ast LoopStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_loop_statement(&mut self, kind: LoopKind, stmt: &'ast LoopStatement) {}

    fn enter_switch_statement(&mut self, stmt: &'ast SwitchStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_switch_statement(&mut self, stmt: &'ast SwitchStatement) {}

    fn enter_switch_branch(&mut self, branch: &'ast SwitchBranch) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_switch_branch(&mut self, branch: &'ast SwitchBranch) {}

    fn enter_section_statement(&mut self, stmt: &'ast SectionStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_section_statement(&mut self, stmt: &'ast SectionStatement) {}

    fn enter_section_end_statement(&mut self, meta: &'ast NodeMeta) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_section_end_statement(&mut self, meta: &'ast NodeMeta) {}

    fn enter_parallel_statement(&mut self, stmt: &'ast ParallelStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_parallel_statement(&mut self, stmt: &'ast ParallelStatement) {}

    fn enter_branch(&mut self, branch: &'ast Branch) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_branch(&mut self, branch: &'ast Branch) {}

    fn enter_meanwhile_statement(&mut self, stmt: &'ast MeanWhileStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_meanwhile_statement(&mut self, stmt: &'ast MeanWhileStatement) {}

    fn enter_noop_statement(&mut self, meta: &'ast NodeMeta) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_noop_statement(&mut self, meta: &'ast NodeMeta) {}

    fn enter_statement_placeholder(&mut self, placeholder: &'ast Placeholder) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_statement_placeholder(&mut self, placeholder: &'ast Placeholder) {}

    fn enter_assignment_statement(&mut self, stmt: &'ast VariableStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_assignment_statement(&mut self, stmt: &'ast VariableStatement) {}

    fn enter_change_statement(&mut self, stmt: &'ast VariableStatement) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_change_statement(&mut self, stmt: &'ast VariableStatement) {}

    // --- expressions --------------------------------------------------------

    fn enter_unary_expression(&mut self, expr: &'ast UnaryExpression) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_unary_expression(&mut self, expr: &'ast UnaryExpression) {}

    fn enter_binary_expression(&mut self, expr: &'ast BinaryExpression) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_binary_expression(&mut self, expr: &'ast BinaryExpression) {}

    fn enter_const_expression(&mut self, expr: &'ast ConstExpression) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_const_expression(&mut self, expr: &'ast ConstExpression) {}

    fn enter_enum_value(&mut self, expr: &'ast EnumValue) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_enum_value(&mut self, expr: &'ast EnumValue) {}

    fn enter_instance_reference(&mut self, expr: &'ast InstanceReference) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_instance_reference(&mut self, expr: &'ast InstanceReference) {}

    fn enter_variable_reference(&mut self, expr: &'ast VariableReference) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_variable_reference(&mut self, expr: &'ast VariableReference) {}

    fn enter_robot_at_position(&mut self, expr: &'ast RobotAtPosition) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_robot_at_position(&mut self, expr: &'ast RobotAtPosition) {}

    fn enter_expression_placeholder(&mut self, placeholder: &'ast Placeholder) -> VisitControl {
        VisitControl::Continue
    }
    fn leave_expression_placeholder(&mut self, placeholder: &'ast Placeholder) {}
}

// ============================================================================
// Walkers
// ============================================================================

pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, program: &'ast Program) {
    if visitor.enter_program(program).descends() {
        for definition in &program.definitions {
            walk_definition(visitor, definition);
        }
    }
    visitor.leave_program(program);
}

pub fn walk_definition<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, definition: &'ast Definition) {
    match definition {
        Definition::Function(function) => walk_function_definition(visitor, function),
        Definition::Instance(instance) => {
            visitor.enter_instance_definition(instance);
            visitor.leave_instance_definition(instance);
        }
        Definition::Unknown => unknown(visitor, UnknownNode::Definition),
    }
}

pub fn walk_function_definition<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, function: &'ast FunctionDefinition) {
    if visitor.enter_function_definition(function).descends() {
        walk_sequence(visitor, &function.statements);
    }
    visitor.leave_function_definition(function);
}

pub fn walk_sequence<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, statements: &'ast [Statement]) {
    for statement in statements {
        walk_statement(visitor, statement);
    }
}

pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, statement: &'ast Statement) {
    match statement {
        Statement::FunctionCall(call) => walk_call(visitor, CallKind::Function, call),
        Statement::OperationCall(call) => walk_call(visitor, CallKind::Operation, call),
        Statement::Call(call) => walk_call(visitor, CallKind::Generic, call),
        Statement::Wait(wait) => {
            if visitor.enter_wait_statement(wait).descends() {
                walk_expression(visitor, &wait.condition);
            }
            visitor.leave_wait_statement(wait);
        }
        Statement::If(stmt) => walk_condition_statement(visitor, stmt),
        Statement::While(stmt) => walk_loop(visitor, LoopKind::While, stmt),
        Statement::Until(stmt) => walk_loop(visitor, LoopKind::Until, stmt),
        Statement::Switch(stmt) => walk_switch(visitor, stmt),
        Statement::Section(stmt) => {
            if visitor.enter_section_statement(stmt).descends() {
                walk_sequence(visitor, &stmt.statements);
            }
            visitor.leave_section_statement(stmt);
        }
        Statement::SectionEnd(meta) => {
            visitor.enter_section_end_statement(meta);
            visitor.leave_section_end_statement(meta);
        }
        Statement::Parallel(stmt) => {
            if visitor.enter_parallel_statement(stmt).descends() {
                for branch in &stmt.branches {
                    if visitor.enter_branch(branch).descends() {
                        walk_sequence(visitor, &branch.statements);
                    }
                    visitor.leave_branch(branch);
                }
            }
            visitor.leave_parallel_statement(stmt);
        }
        Statement::MeanWhile(stmt) => {
            if visitor.enter_meanwhile_statement(stmt).descends() {
                walk_sequence(visitor, &stmt.statements);
            }
            visitor.leave_meanwhile_statement(stmt);
        }
        Statement::Noop(meta) => {
            visitor.enter_noop_statement(meta);
            visitor.leave_noop_statement(meta);
        }
        Statement::Placeholder(placeholder) => {
            visitor.enter_statement_placeholder(placeholder);
            visitor.leave_statement_placeholder(placeholder);
        }
        Statement::Assignment(stmt) => {
            if visitor.enter_assignment_statement(stmt).descends() {
                walk_expression(visitor, &stmt.value);
            }
            visitor.leave_assignment_statement(stmt);
        }
        Statement::Change(stmt) => {
            if visitor.enter_change_statement(stmt).descends() {
                walk_expression(visitor, &stmt.value);
            }
            visitor.leave_change_statement(stmt);
        }
        Statement::Unknown => unknown(visitor, UnknownNode::Statement),
    }
}

fn walk_call<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, kind: CallKind, call: &'ast CallStatement) {
    if visitor.enter_call_statement(kind, call).descends() {
        for argument in &call.input_arguments {
            walk_expression(visitor, argument);
        }
    }
    visitor.leave_call_statement(kind, call);
}

fn walk_condition_statement<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast ConditionStatement) {
    if visitor.enter_condition_statement(stmt).descends() {
        for conditional in &stmt.conditionals {
            if visitor.enter_conditional(conditional).descends() {
                walk_expression(visitor, &conditional.condition);
                walk_sequence(visitor, &conditional.then);
            }
            visitor.leave_conditional(conditional);
        }
        if let Some(otherwise) = &stmt.otherwise {
            if visitor.enter_otherwise(stmt).descends() {
                walk_sequence(visitor, otherwise);
            }
            visitor.leave_otherwise(stmt);
        }
    }
    visitor.leave_condition_statement(stmt);
}

fn walk_loop<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, kind: LoopKind, stmt: &'ast LoopStatement) {
    if visitor.enter_loop_statement(kind, stmt).descends() {
        walk_expression(visitor, &stmt.condition);
        walk_sequence(visitor, &stmt.statements);
    }
    visitor.leave_loop_statement(kind, stmt);
}

fn walk_switch<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast SwitchStatement) {
    if visitor.enter_switch_statement(stmt).descends() {
        walk_expression(visitor, &stmt.expression);
        for branch in &stmt.cases {
            if visitor.enter_switch_branch(branch).descends() {
                walk_sequence(visitor, branch.then());
            }
            visitor.leave_switch_branch(branch);
        }
    }
    visitor.leave_switch_statement(stmt);
}

pub fn walk_expression<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expression: &'ast Expression) {
    match expression {
        Expression::Unary(expr) => {
            if visitor.enter_unary_expression(expr).descends() {
                walk_expression(visitor, &expr.operand);
            }
            visitor.leave_unary_expression(expr);
        }
        Expression::Binary(expr) => {
            if visitor.enter_binary_expression(expr).descends() {
                walk_expression(visitor, &expr.left);
                walk_expression(visitor, &expr.right);
            }
            visitor.leave_binary_expression(expr);
        }
        Expression::Const(expr) => {
            visitor.enter_const_expression(expr);
            visitor.leave_const_expression(expr);
        }
        Expression::Enum(expr) => {
            visitor.enter_enum_value(expr);
            visitor.leave_enum_value(expr);
        }
        Expression::Instance(expr) => {
            visitor.enter_instance_reference(expr);
            visitor.leave_instance_reference(expr);
        }
        Expression::Variable(expr) => {
            visitor.enter_variable_reference(expr);
            visitor.leave_variable_reference(expr);
        }
        Expression::RobotAtPosition(expr) => {
            visitor.enter_robot_at_position(expr);
            visitor.leave_robot_at_position(expr);
        }
        Expression::Placeholder(placeholder) => {
            visitor.enter_expression_placeholder(placeholder);
            visitor.leave_expression_placeholder(placeholder);
        }
        Expression::Unknown => unknown(visitor, UnknownNode::Expression),
    }
}

fn unknown<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: UnknownNode) {
    tracing::warn!(?node, "node kind not supported by the traversal, skipping");
    visitor.visit_unknown_node(node);
}
