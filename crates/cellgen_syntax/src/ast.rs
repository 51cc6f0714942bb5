//! Node model for work-cell sequence documents.
//!
//! Every node is a JSON object discriminated by a `kind` string. The enums below are closed over the kinds the
//! generator understands; any other `kind` decodes to the `Unknown` variant of the surrounding enum so that a newer
//! editor can add node kinds without breaking older generators.

use std::fmt;

use cellgen_core::lang::operators::{self, Fixity, OperatorId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered statement list (function body, branch body, ...).
pub type Sequence = Vec<Statement>;

/// Fields shared by every node. None of them influence generation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMeta {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

impl NodeMeta {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Editor comment attached to a node: a single line or a list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Comment {
    Line(String),
    Lines(Vec<String>),
}

/// Severity of a placeholder node left behind by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// An unfinished statement or expression slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub severity: Severity,
    #[serde(default)]
    pub data: Value,
}

// ============================================================================
// Program and definitions
// ============================================================================

/// Root of a sequence document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub entry_point: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Program {
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// First definition whose id equals `id`.
    pub fn find_definition(&self, id: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.id() == Some(id))
    }

    /// First definition with this id, if it is a function.
    pub fn find_function(&self, id: &str) -> Option<&FunctionDefinition> {
        match self.find_definition(id) {
            Some(Definition::Function(f)) => Some(f),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Definition {
    #[serde(rename = "function")]
    Function(FunctionDefinition),
    #[serde(rename = "instance_def")]
    Instance(InstanceDefinition),
    #[serde(other)]
    Unknown,
}

impl Definition {
    pub fn id(&self) -> Option<&str> {
        match self {
            Definition::Function(f) => Some(&f.meta.id),
            Definition::Instance(i) => Some(&i.meta.id),
            Definition::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<Parameter>,
    #[serde(default)]
    pub statements: Sequence,
}

impl FunctionDefinition {
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}

/// A typed input parameter of a function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub type_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Statement {
    #[serde(rename = "functionCall")]
    FunctionCall(CallStatement),
    #[serde(rename = "operationCall")]
    OperationCall(CallStatement),
    #[serde(rename = "call")]
    Call(CallStatement),
    #[serde(rename = "wait")]
    Wait(WaitStatement),
    #[serde(rename = "if")]
    If(ConditionStatement),
    #[serde(rename = "while")]
    While(LoopStatement),
    #[serde(rename = "until")]
    Until(LoopStatement),
    #[serde(rename = "switch")]
    Switch(SwitchStatement),
    #[serde(rename = "section")]
    Section(SectionStatement),
    #[serde(rename = "sectionEnd")]
    SectionEnd(NodeMeta),
    #[serde(rename = "parallel")]
    Parallel(ParallelStatement),
    #[serde(rename = "meanWhile")]
    MeanWhile(MeanWhileStatement),
    #[serde(rename = "noop")]
    Noop(NodeMeta),
    #[serde(rename = "statement_placeholder")]
    Placeholder(Placeholder),
    /// Declared by the model; the Java emitter does not lower it.
    #[serde(rename = "assignment")]
    Assignment(VariableStatement),
    /// Declared by the model; the Java emitter does not lower it.
    #[serde(rename = "change")]
    Change(VariableStatement),
    #[serde(other)]
    Unknown,
}

impl Statement {
    /// The wire `kind` of this statement (`"unknown"` for unrecognized kinds).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::FunctionCall(_) => "functionCall",
            Statement::OperationCall(_) => "operationCall",
            Statement::Call(_) => "call",
            Statement::Wait(_) => "wait",
            Statement::If(_) => "if",
            Statement::While(_) => "while",
            Statement::Until(_) => "until",
            Statement::Switch(_) => "switch",
            Statement::Section(_) => "section",
            Statement::SectionEnd(_) => "sectionEnd",
            Statement::Parallel(_) => "parallel",
            Statement::MeanWhile(_) => "meanWhile",
            Statement::Noop(_) => "noop",
            Statement::Placeholder(_) => "statement_placeholder",
            Statement::Assignment(_) => "assignment",
            Statement::Change(_) => "change",
            Statement::Unknown => "unknown",
        }
    }

    pub fn meta(&self) -> Option<&NodeMeta> {
        match self {
            Statement::FunctionCall(s) | Statement::OperationCall(s) | Statement::Call(s) => Some(&s.meta),
            Statement::Wait(s) => Some(&s.meta),
            Statement::If(s) => Some(&s.meta),
            Statement::While(s) | Statement::Until(s) => Some(&s.meta),
            Statement::Switch(s) => Some(&s.meta),
            Statement::Section(s) => Some(&s.meta),
            Statement::SectionEnd(meta) | Statement::Noop(meta) => Some(meta),
            Statement::Parallel(s) => Some(&s.meta),
            Statement::MeanWhile(s) => Some(&s.meta),
            Statement::Placeholder(s) => Some(&s.meta),
            Statement::Assignment(s) | Statement::Change(s) => Some(&s.meta),
            Statement::Unknown => None,
        }
    }
}

/// Distinguishes the three call statement kinds sharing [`CallStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Call of a function defined in the same program; followed by the call hierarchy.
    Function,
    /// Call of an operation on an instance (robot, gripper, ...); opaque to the generator.
    Operation,
    /// Call of unspecified kind.
    Generic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub callee_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub condition: Expression,
}

/// `if` / `else if` chain: the first conditional whose condition holds runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub conditionals: Vec<Conditional>,
    #[serde(rename = "else", default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<Sequence>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conditional {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub condition: Expression,
    #[serde(default)]
    pub then: Sequence,
}

/// Distinguishes `while` (loop while true) from `until` (loop while false).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    While,
    Until,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoopStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub condition: Expression,
    #[serde(default)]
    pub statements: Sequence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Expression,
    #[serde(default)]
    pub cases: Vec<SwitchBranch>,
}

/// One arm of a switch. An arm carrying a `default` key is a default arm whatever its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SwitchBranch {
    Default(DefaultBranch),
    Case(CaseBranch),
}

impl SwitchBranch {
    pub fn meta(&self) -> &NodeMeta {
        match self {
            SwitchBranch::Default(d) => &d.meta,
            SwitchBranch::Case(c) => &c.meta,
        }
    }

    pub fn then(&self) -> &Sequence {
        match self {
            SwitchBranch::Default(d) => &d.then,
            SwitchBranch::Case(c) => &c.then,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseBranch {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub case: Value,
    #[serde(default)]
    pub then: Sequence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultBranch {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub default: bool,
    /// Label used when this arm is not the first default of its switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Value>,
    #[serde(default)]
    pub then: Sequence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub statements: Sequence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub branches: Vec<Branch>,
}

/// One branch of a parallel statement. An `open` branch is started but never awaited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub statements: Sequence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeanWhileStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statements: Sequence,
}

/// Shared shape of `assignment` and `change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub instance_id: String,
    pub value: Expression,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    #[serde(rename = "unary")]
    Unary(UnaryExpression),
    #[serde(rename = "binary")]
    Binary(BinaryExpression),
    #[serde(rename = "const")]
    Const(ConstExpression),
    #[serde(rename = "enum")]
    Enum(EnumValue),
    #[serde(rename = "instance")]
    Instance(InstanceReference),
    #[serde(rename = "variable")]
    Variable(VariableReference),
    #[serde(rename = "robotAtPos")]
    RobotAtPosition(RobotAtPosition),
    #[serde(rename = "expression_placeholder")]
    Placeholder(Placeholder),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnaryExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// A literal. `value` is any JSON value; `type_id` names its declared type when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub type_id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceReference {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableReference {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub variable_id: String,
}

/// "Robot is at position" test; `value` names the position instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotAtPosition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<InstanceReference>,
}

// ============================================================================
// Operators
// ============================================================================

/// Error for an operator spelling outside the DSL vocabulary (or used with the wrong fixity).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {fixity} operator `{spelling}`")]
pub struct UnknownOperator {
    pub spelling: String,
    pub fixity: &'static str,
}

/// Prefix operator of a [`UnaryExpression`]. Decodes from any accepted DSL spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnaryOperator(OperatorId);

/// Infix operator of a [`BinaryExpression`]. Decodes from any accepted DSL spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BinaryOperator(OperatorId);

impl UnaryOperator {
    pub fn new(spelling: &str) -> Result<Self, UnknownOperator> {
        operators::from_str_with_fixity(spelling, Fixity::Prefix)
            .map(Self)
            .ok_or_else(|| UnknownOperator {
                spelling: spelling.to_string(),
                fixity: "unary",
            })
    }

    pub fn id(self) -> OperatorId {
        self.0
    }
}

impl BinaryOperator {
    pub fn new(spelling: &str) -> Result<Self, UnknownOperator> {
        operators::from_str_with_fixity(spelling, Fixity::Infix)
            .map(Self)
            .ok_or_else(|| UnknownOperator {
                spelling: spelling.to_string(),
                fixity: "binary",
            })
    }

    pub fn id(self) -> OperatorId {
        self.0
    }
}

impl TryFrom<String> for UnaryOperator {
    type Error = UnknownOperator;

    fn try_from(spelling: String) -> Result<Self, Self::Error> {
        Self::new(&spelling)
    }
}

impl TryFrom<String> for BinaryOperator {
    type Error = UnknownOperator;

    fn try_from(spelling: String) -> Result<Self, Self::Error> {
        Self::new(&spelling)
    }
}

impl From<UnaryOperator> for String {
    fn from(op: UnaryOperator) -> Self {
        operators::as_str(op.0).to_string()
    }
}

impl From<BinaryOperator> for String {
    fn from(op: BinaryOperator) -> Self {
        operators::as_str(op.0).to_string()
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.0))
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operators::as_str(self.0))
    }
}
