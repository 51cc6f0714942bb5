//! Statement lowering.
//!
//! | statement                                   | Java                                              |
//! |---------------------------------------------|---------------------------------------------------|
//! | wait `c`                                    | `while (!c) {}`                                   |
//! | if / else if / else                         | one block per arm, each keyword on its own line   |
//! | while `c` / until `c`                       | `while (c) {..}` / `while (!(c)) {..}`            |
//! | switch                                      | `case v:` arms ending in `break;`, `default:` last |
//! | parallel                                    | one `Thread tN` per branch, guarded joins for non-open |
//! | section, sectionEnd, meanWhile, noop, placeholder | nothing                                     |

use cellgen_syntax::ast::*;
use serde_json::Value;

use super::{EmitError, ProgramEmitter};
use crate::backend::context::GenerationContext;
use crate::backend::java_emitter::JavaEmitter;
use crate::backend::render::{const_text, render_expression};
use crate::diagnostics::{Warning, WarningKind};

impl ProgramEmitter<'_> {
    pub(super) fn emit_sequence(
        &self,
        out: &mut JavaEmitter,
        statements: &[Statement],
        ctx: &mut GenerationContext,
    ) -> Result<(), EmitError> {
        for statement in statements {
            self.emit_statement(out, statement, ctx)?;
        }
        Ok(())
    }

    fn emit_statement(
        &self,
        out: &mut JavaEmitter,
        statement: &Statement,
        ctx: &mut GenerationContext,
    ) -> Result<(), EmitError> {
        match statement {
            Statement::FunctionCall(call) | Statement::OperationCall(call) | Statement::Call(call) => {
                self.emit_call(out, call, ctx);
                Ok(())
            }
            Statement::Wait(wait) => {
                let condition = render_expression(ctx, &wait.condition);
                out.line(&format!("while (!{condition}) {{}}"));
                Ok(())
            }
            Statement::If(stmt) => self.emit_condition(out, stmt, ctx),
            Statement::While(stmt) => self.emit_loop(out, LoopKind::While, stmt, ctx),
            Statement::Until(stmt) => self.emit_loop(out, LoopKind::Until, stmt, ctx),
            Statement::Switch(stmt) => self.emit_switch(out, stmt, ctx),
            Statement::Parallel(stmt) => self.emit_parallel(out, stmt, ctx),
            Statement::Section(_) | Statement::SectionEnd(_) | Statement::MeanWhile(_) | Statement::Noop(_) => Ok(()),
            Statement::Placeholder(placeholder) => {
                ctx.warn_placeholder("statement", placeholder.severity, &placeholder.meta.id);
                Ok(())
            }
            Statement::Assignment(stmt) | Statement::Change(stmt) => Err(EmitError::Unsupported {
                kind: statement.kind_name(),
                node_id: stmt.meta.id.clone(),
            }),
            Statement::Unknown => {
                ctx.warn(Warning::new(
                    WarningKind::UnknownNode,
                    "statement of unknown kind emitted as nothing",
                ));
                Ok(())
            }
        }
    }

    fn emit_condition(
        &self,
        out: &mut JavaEmitter,
        stmt: &ConditionStatement,
        ctx: &mut GenerationContext,
    ) -> Result<(), EmitError> {
        if stmt.conditionals.is_empty() {
            // Without an `if` arm the else body runs unconditionally.
            if let Some(otherwise) = &stmt.otherwise {
                self.emit_sequence(out, otherwise, ctx)?;
            }
            return Ok(());
        }

        for (index, conditional) in stmt.conditionals.iter().enumerate() {
            let keyword = if index == 0 { "if" } else { "else if" };
            let condition = condition_text(ctx, &conditional.condition);
            out.try_block(&format!("{keyword} ({condition})"), "}", |out| {
                self.emit_sequence(out, &conditional.then, ctx)
            })?;
        }
        if let Some(otherwise) = &stmt.otherwise {
            out.try_block("else", "}", |out| self.emit_sequence(out, otherwise, ctx))?;
        }
        Ok(())
    }

    fn emit_loop(
        &self,
        out: &mut JavaEmitter,
        kind: LoopKind,
        stmt: &LoopStatement,
        ctx: &mut GenerationContext,
    ) -> Result<(), EmitError> {
        let condition = render_expression(ctx, &stmt.condition);
        let header = match kind {
            LoopKind::While => format!("while ({condition})"),
            LoopKind::Until => format!("while (!({condition}))"),
        };
        out.try_block(&header, "}", |out| self.emit_sequence(out, &stmt.statements, ctx))
    }

    fn emit_switch(
        &self,
        out: &mut JavaEmitter,
        stmt: &SwitchStatement,
        ctx: &mut GenerationContext,
    ) -> Result<(), EmitError> {
        let scrutinee = render_expression(ctx, &stmt.expression);

        // The first default arm is the default clause; later ones keep their position as ordinary labels.
        let mut default: Option<&DefaultBranch> = None;
        let mut labelled: Vec<(String, &Sequence)> = Vec::with_capacity(stmt.cases.len());
        for branch in &stmt.cases {
            match branch {
                SwitchBranch::Default(d) if default.is_none() => default = Some(d),
                SwitchBranch::Default(d) => {
                    labelled.push((label_text(d.case.as_ref().unwrap_or(&Value::Null)), &d.then))
                }
                SwitchBranch::Case(c) => labelled.push((label_text(&c.case), &c.then)),
            }
        }

        out.try_block(&format!("switch ({scrutinee})"), "}", |out| {
            for (label, body) in labelled {
                self.emit_switch_arm(out, &format!("case {label}:"), body, ctx)?;
            }
            if let Some(d) = default {
                self.emit_switch_arm(out, "default:", &d.then, ctx)?;
            }
            Ok(())
        })
    }

    fn emit_switch_arm(
        &self,
        out: &mut JavaEmitter,
        label: &str,
        body: &[Statement],
        ctx: &mut GenerationContext,
    ) -> Result<(), EmitError> {
        out.line(label);
        out.indent();
        self.emit_sequence(out, body, ctx)?;
        out.line("break;");
        out.dedent();
        Ok(())
    }

    fn emit_parallel(
        &self,
        out: &mut JavaEmitter,
        stmt: &ParallelStatement,
        ctx: &mut GenerationContext,
    ) -> Result<(), EmitError> {
        let mut joined = Vec::new();
        for branch in &stmt.branches {
            let thread = ctx.next_thread_name();
            out.try_block(&format!("Thread {thread} = new Thread(() ->"), "});", |out| {
                self.emit_sequence(out, &branch.statements, ctx)
            })?;
            out.line(&format!("{thread}.start();"));
            if !branch.open {
                joined.push(thread);
            }
        }
        if joined.is_empty() {
            return Ok(());
        }

        // `join` throws a checked exception, and a `Runnable` body cannot declare it.
        out.line("try {");
        out.indent();
        for thread in joined {
            out.line(&format!("{thread}.join();"));
        }
        out.dedent();
        out.line("} catch (InterruptedException e) {");
        out.indent();
        out.line("Thread.currentThread().interrupt();");
        out.dedent();
        out.line("}");
        Ok(())
    }
}

/// Condition text of an `if` arm.
///
/// A bare instance reference goes through the member rule directly instead of the renderer.
fn condition_text(ctx: &mut GenerationContext, condition: &Expression) -> String {
    match condition {
        Expression::Instance(reference) => ctx.member_path(&reference.instance_id).to_string(),
        other => render_expression(ctx, other),
    }
}

/// Text of a `case` label.
fn label_text(value: &Value) -> String {
    const_text(value, None)
}
