//! Class-level emission: fields, constructor and one method per reachable function.

use cellgen_core::qualified_id;
use cellgen_syntax::ast::{FunctionDefinition, Program};

use super::{EmitError, ProgramEmitter};
use crate::backend::context::GenerationContext;
use crate::backend::hierarchy::CallHierarchy;
use crate::backend::java_emitter::JavaEmitter;

impl ProgramEmitter<'_> {
    /// Emit the complete Java class for `program`.
    ///
    /// Methods are emitted first (in hierarchy order) because emitting them is what discovers the members; the class
    /// shell with fields and constructor is assembled around them afterwards.
    #[tracing::instrument(skip_all, fields(functions = hierarchy.len()))]
    pub fn emit_program(
        &self,
        program: &Program,
        hierarchy: &CallHierarchy<'_>,
        ctx: &mut GenerationContext,
    ) -> Result<String, EmitError> {
        let class_name = self.class_name(program)?;

        let mut methods = JavaEmitter::with_level(self.config.indent, 1);
        for (index, function) in hierarchy.functions().enumerate() {
            ctx.reset_threads();
            methods.blank_line();
            self.emit_method(&mut methods, function, index == 0, ctx)?;
        }

        let mut out = JavaEmitter::new(self.config.indent);
        out.line(&format!("public class {class_name} {{"));
        out.indent();
        self.emit_fields(&mut out, ctx);
        self.emit_constructor(&mut out, &class_name, ctx);
        out.write(methods.as_str());
        out.dedent();
        out.line("}");
        Ok(out.finish())
    }

    /// The configured class name, or the program id with alias and qualifier removed.
    pub fn class_name(&self, program: &Program) -> Result<String, EmitError> {
        let name = match &self.config.class_name {
            Some(name) => name.as_str(),
            None => qualified_id::unqualified(program.id()),
        };
        if name.is_empty() {
            return Err(EmitError::MissingClassName {
                program_id: program.id().to_string(),
            });
        }
        Ok(name.to_string())
    }

    fn emit_fields(&self, out: &mut JavaEmitter, ctx: &GenerationContext) {
        let mut any = false;
        for member in ctx.members() {
            out.line(&format!("private {} {member};", self.config.member_type));
            any = true;
        }
        if any {
            out.blank_line();
        }
    }

    fn emit_constructor(&self, out: &mut JavaEmitter, class_name: &str, ctx: &GenerationContext) {
        let params: Vec<String> = ctx
            .members()
            .map(|member| format!("{} {member}", self.config.member_type))
            .collect();
        out.block(&format!("public {class_name}({})", params.join(", ")), |out| {
            for member in ctx.members() {
                out.line(&format!("this.{member} = {member};"));
            }
        });
    }

    fn emit_method(
        &self,
        out: &mut JavaEmitter,
        function: &FunctionDefinition,
        is_entry: bool,
        ctx: &mut GenerationContext,
    ) -> Result<(), EmitError> {
        let parameters = function
            .input
            .iter()
            .map(|p| {
                format!(
                    "{} {}",
                    qualified_id::simple_name(&p.type_id),
                    qualified_id::simple_name(&p.meta.id)
                )
            })
            .collect();
        ctx.register_parameters(function.id(), parameters);

        let (visibility, name) = if is_entry {
            ("public", self.config.entry_method.as_str())
        } else {
            ("private", qualified_id::simple_name(function.id()))
        };
        tracing::debug!(function = function.id(), method = name, "emitting method");

        let header = format!(
            "{visibility} void {name}({})",
            ctx.parameters(function.id()).join(", ")
        );
        out.try_block(&header, "}", |out| self.emit_sequence(out, &function.statements, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::EmitConfig;
    use serde_json::json;

    fn program(id: &str) -> Program {
        serde_json::from_value(json!({
            "id": id,
            "entryPoint": "main",
            "definitions": [{"kind": "function", "id": "main", "statements": []}]
        }))
        .unwrap()
    }

    #[test]
    fn class_name_strips_alias_and_qualifier() {
        let config = EmitConfig::default();
        let emitter = ProgramEmitter::new(&config);
        assert_eq!(emitter.class_name(&program("x=cell.ParkCycle")).unwrap(), "ParkCycle");
        assert_eq!(emitter.class_name(&program("ParkCycle")).unwrap(), "ParkCycle");
    }

    #[test]
    fn class_name_override_wins() {
        let config = EmitConfig::default().with_class_name("Custom");
        let emitter = ProgramEmitter::new(&config);
        assert_eq!(emitter.class_name(&program("cell.ParkCycle")).unwrap(), "Custom");
    }

    #[test]
    fn empty_class_name_is_an_error() {
        let config = EmitConfig::default();
        let emitter = ProgramEmitter::new(&config);
        assert!(matches!(
            emitter.class_name(&program("cell.")),
            Err(EmitError::MissingClassName { .. })
        ));
    }

    #[test]
    fn parameters_are_cached_per_function() {
        let p: Program = serde_json::from_value(json!({
            "id": "cell.P",
            "entryPoint": "main",
            "definitions": [{
                "kind": "function", "id": "main",
                "input": [{"id": "main.speed", "typeId": "types.Speed"}, {"id": "count", "typeId": "int"}],
                "statements": []
            }]
        }))
        .unwrap();
        let hierarchy = CallHierarchy::resolve(&p).unwrap();
        let config = EmitConfig::default();
        let mut ctx = GenerationContext::new();
        let code = ProgramEmitter::new(&config).emit_program(&p, &hierarchy, &mut ctx).unwrap();
        assert_eq!(ctx.parameters("main"), ["Speed speed", "int count"]);
        assert!(code.contains("public void start(Speed speed, int count) {"), "{code}");
    }
}
