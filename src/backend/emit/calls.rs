//! Call statements.

use cellgen_core::qualified_id;
use cellgen_syntax::ast::{CallStatement, Expression};

use super::ProgramEmitter;
use crate::backend::context::GenerationContext;
use crate::backend::java_emitter::JavaEmitter;
use crate::backend::render::render_expression;

impl ProgramEmitter<'_> {
    /// Emit `name(args);`. A dotted callee contributes its qualifier as a member.
    pub(super) fn emit_call(&self, out: &mut JavaEmitter, call: &CallStatement, ctx: &mut GenerationContext) {
        let name = ctx.member_path(&call.callee_id);
        let args: Vec<String> = call
            .input_arguments
            .iter()
            .map(|arg| argument_text(ctx, arg))
            .collect();
        out.line(&format!("{name}({});", args.join(", ")));
    }
}

/// Enum arguments keep their type so the call site reads `Mode.FAST`; everything else goes through the renderer.
fn argument_text(ctx: &mut GenerationContext, arg: &Expression) -> String {
    match arg {
        Expression::Enum(value) => format!("{}.{}", qualified_id::unqualified(&value.type_id), value.value),
        other => render_expression(ctx, other),
    }
}
