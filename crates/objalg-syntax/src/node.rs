//! Node kinds and their shapes.
//! 节点类型及其形状。

use std::fmt;

/// The tag of a node.
/// 节点标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Literal,
    Add,
    Boolean,
    If,
    Var,
    Assign,
    ExprStmt,
    Block,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Literal,
        NodeKind::Add,
        NodeKind::Boolean,
        NodeKind::If,
        NodeKind::Var,
        NodeKind::Assign,
        NodeKind::ExprStmt,
        NodeKind::Block,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Literal => "Literal",
            NodeKind::Add => "Add",
            NodeKind::Boolean => "Boolean",
            NodeKind::If => "If",
            NodeKind::Var => "Var",
            NodeKind::Assign => "Assign",
            NodeKind::ExprStmt => "ExprStmt",
            NodeKind::Block => "Block",
        }
    }

    /// Whether this kind belongs to the statement algebra.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::Var | NodeKind::Assign | NodeKind::ExprStmt | NodeKind::Block
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer literal `42` / 整数字面量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub value: i64,
}

/// Addition `a + b` / 加法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Add<R> {
    pub lhs: R,
    pub rhs: R,
}

/// Boolean literal / 布尔字面量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boolean {
    pub value: bool,
}

/// Conditional `if p then a else b` / 条件表达式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If<R> {
    pub pred: R,
    pub then_branch: R,
    pub else_branch: R,
}

/// Variable reference / 变量引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    pub name: String,
}

/// Assignment `x = e` / 赋值语句
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign<R> {
    pub name: String,
    pub value: R,
}

/// Expression statement / 表达式语句
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStmt<R> {
    pub inner: R,
}

/// Block of statements / 语句块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<R> {
    pub items: Vec<R>,
}

/// A borrowed view of a node, with children of type `R`.
/// 节点的借用视图。
///
/// Every algebra result can be turned into one of these, so a result
/// built by any algebra can be matched on by node kind and have its
/// fields read.
#[derive(Debug)]
pub enum NodeRef<'a, R> {
    Literal(&'a Literal),
    Add(&'a Add<R>),
    Boolean(&'a Boolean),
    If(&'a If<R>),
    Var(&'a Var),
    Assign(&'a Assign<R>),
    ExprStmt(&'a ExprStmt<R>),
    Block(&'a Block<R>),
}

impl<R> Clone for NodeRef<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for NodeRef<'_, R> {}

impl<'a, R> NodeRef<'a, R> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Literal(_) => NodeKind::Literal,
            NodeRef::Add(_) => NodeKind::Add,
            NodeRef::Boolean(_) => NodeKind::Boolean,
            NodeRef::If(_) => NodeKind::If,
            NodeRef::Var(_) => NodeKind::Var,
            NodeRef::Assign(_) => NodeKind::Assign,
            NodeRef::ExprStmt(_) => NodeKind::ExprStmt,
            NodeRef::Block(_) => NodeKind::Block,
        }
    }

    /// Direct children, in field order.
    pub fn children(&self) -> Vec<&'a R> {
        match *self {
            NodeRef::Literal(_) | NodeRef::Boolean(_) | NodeRef::Var(_) => Vec::new(),
            NodeRef::Add(add) => vec![&add.lhs, &add.rhs],
            NodeRef::If(iff) => vec![&iff.pred, &iff.then_branch, &iff.else_branch],
            NodeRef::Assign(assign) => vec![&assign.value],
            NodeRef::ExprStmt(stmt) => vec![&stmt.inner],
            NodeRef::Block(block) => block.items.iter().collect(),
        }
    }
}

/// A node shape: the fields of one node kind.
///
/// Implemented by each shape struct for any child type, so the same
/// shape can carry plain trees, witnesses or anything else.
pub trait Shape<R> {
    const KIND: NodeKind;

    fn view(&self) -> NodeRef<'_, R>;
}

impl<R> Shape<R> for Literal {
    const KIND: NodeKind = NodeKind::Literal;

    fn view(&self) -> NodeRef<'_, R> {
        NodeRef::Literal(self)
    }
}

impl<R> Shape<R> for Add<R> {
    const KIND: NodeKind = NodeKind::Add;

    fn view(&self) -> NodeRef<'_, R> {
        NodeRef::Add(self)
    }
}

impl<R> Shape<R> for Boolean {
    const KIND: NodeKind = NodeKind::Boolean;

    fn view(&self) -> NodeRef<'_, R> {
        NodeRef::Boolean(self)
    }
}

impl<R> Shape<R> for If<R> {
    const KIND: NodeKind = NodeKind::If;

    fn view(&self) -> NodeRef<'_, R> {
        NodeRef::If(self)
    }
}

impl<R> Shape<R> for Var {
    const KIND: NodeKind = NodeKind::Var;

    fn view(&self) -> NodeRef<'_, R> {
        NodeRef::Var(self)
    }
}

impl<R> Shape<R> for Assign<R> {
    const KIND: NodeKind = NodeKind::Assign;

    fn view(&self) -> NodeRef<'_, R> {
        NodeRef::Assign(self)
    }
}

impl<R> Shape<R> for ExprStmt<R> {
    const KIND: NodeKind = NodeKind::ExprStmt;

    fn view(&self) -> NodeRef<'_, R> {
        NodeRef::ExprStmt(self)
    }
}

impl<R> Shape<R> for Block<R> {
    const KIND: NodeKind = NodeKind::Block;

    fn view(&self) -> NodeRef<'_, R> {
        NodeRef::Block(self)
    }
}
