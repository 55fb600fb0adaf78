use crate::ast::{Expr, LiteralValue, Token};

/// An operation over expression trees.
///
/// Implementors get one method per [`Expr`] variant and call
/// [`Expr::accept`] on children to recurse. New operations (printing,
/// evaluation, analysis) are added by writing a new visitor, never by
/// touching the node types.
///
/// # Examples
///
/// ```
/// use lox_syntax::ast::{Expr, LiteralValue, Token, Visitor};
///
/// struct Depth;
///
/// impl Visitor for Depth {
///     type Output = usize;
///
///     fn visit_binary(&mut self, left: &Expr, _: &Token, right: &Expr) -> usize {
///         1 + left.accept(self).max(right.accept(self))
///     }
///     fn visit_grouping(&mut self, inner: &Expr) -> usize {
///         1 + inner.accept(self)
///     }
///     fn visit_unary(&mut self, _: &Token, operand: &Expr) -> usize {
///         1 + operand.accept(self)
///     }
///     fn visit_literal(&mut self, _: &LiteralValue) -> usize {
///         1
///     }
/// }
///
/// let expr = Expr::grouping(Expr::literal(LiteralValue::Nil));
/// assert_eq!(expr.accept(&mut Depth), 2);
/// ```
pub trait Visitor {
    type Output;

    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Self::Output;
    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output;
    fn visit_unary(&mut self, operator: &Token, operand: &Expr) -> Self::Output;
    fn visit_literal(&mut self, value: &LiteralValue) -> Self::Output;
}
