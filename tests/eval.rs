//! Integration tests for the evaluating algebras.

use objalg_algebra::{ErrorKind, IntAlg, IntBoolAlg, StmtAlg, Union, Witness};
use objalg_eval::{Eval, EvalError, EvalNode, Evaluate, IntBoolEval, IntEval, StmtEval, Value};
use objalg_syntax::Literal;

/// A node whose evaluation is a test failure.
fn tripwire() -> EvalNode {
    Witness::<Evaluate>::synthesize(Literal { value: 0 }, |_: &Literal| {
        panic!("untaken branch was evaluated")
    })
}

// ============================================================================
// Integers
// ============================================================================

#[test]
fn test_eval_literal() {
    let alg = IntEval::new();
    assert_eq!(alg.literal(42).eval(), Ok(Value::Int(42)));
    assert_eq!(alg.literal(-7).eval(), Ok(Value::Int(-7)));
}

#[test]
fn test_eval_add() {
    let alg = IntEval::new();
    let e = alg.add(alg.literal(1), alg.literal(2));
    assert_eq!(e.eval(), Ok(Value::Int(3)));
}

#[test]
fn test_eval_nested_add() {
    let alg = IntBoolEval::new();
    let e = alg.add(
        alg.add(alg.literal(10), alg.literal(20)),
        alg.add(alg.literal(-5), alg.literal(0)),
    );
    assert_eq!(e.eval(), Ok(Value::Int(25)));
}

#[test]
fn test_eval_add_overflow() {
    let alg = IntEval::new();
    let e = alg.add(alg.literal(i64::MIN), alg.literal(-1));
    assert_eq!(
        e.eval(),
        Err(EvalError::Overflow { lhs: i64::MIN, rhs: -1 })
    );
}

#[test]
fn test_eval_is_repeatable() {
    let alg = IntEval::new();
    let e = alg.add(alg.literal(2), alg.literal(2));
    assert_eq!(e.eval(), e.eval());
}

// ============================================================================
// Booleans and conditionals
// ============================================================================

#[test]
fn test_eval_boolean() {
    let alg = IntBoolEval::new();
    assert_eq!(alg.boolean(true).eval(), Ok(Value::Bool(true)));
    assert_eq!(alg.boolean(false).eval(), Ok(Value::Bool(false)));
}

#[test]
fn test_eval_iff_true() {
    let alg = IntBoolEval::new();
    let e = alg.iff(alg.boolean(true), alg.literal(10), alg.literal(20)).unwrap();
    assert_eq!(e.eval(), Ok(Value::Int(10)));
}

#[test]
fn test_eval_iff_false() {
    let alg = IntBoolEval::new();
    let e = alg.iff(alg.boolean(false), alg.literal(10), alg.literal(20)).unwrap();
    assert_eq!(e.eval(), Ok(Value::Int(20)));
}

#[test]
fn test_eval_iff_does_not_touch_else_branch() {
    let alg = IntBoolEval::new();
    let e = alg.iff(alg.boolean(true), alg.literal(1), tripwire()).unwrap();
    assert_eq!(e.eval(), Ok(Value::Int(1)));
}

#[test]
fn test_eval_iff_does_not_touch_then_branch() {
    let alg = IntBoolEval::new();
    let e = alg.iff(alg.boolean(false), tripwire(), alg.literal(2)).unwrap();
    assert_eq!(e.eval(), Ok(Value::Int(2)));
}

#[test]
fn test_eval_iff_nested_predicate() {
    let alg = IntBoolEval::new();
    let pred = alg
        .iff(alg.boolean(false), alg.boolean(true), alg.boolean(false))
        .unwrap();
    let e = alg.iff(pred, alg.literal(1), alg.literal(2)).unwrap();
    assert_eq!(e.eval(), Ok(Value::Int(2)));
}

#[test]
fn test_eval_iff_rejects_literal_predicate() {
    let alg = IntBoolEval::new();
    let err = alg
        .iff(alg.literal(1), alg.literal(10), alg.literal(20))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("`Literal` of sort int"));
}

#[test]
fn test_eval_iff_rejects_sum_predicate() {
    let alg = IntBoolEval::new();
    let pred = alg.add(alg.literal(1), alg.literal(1));
    assert!(alg.iff(pred, alg.literal(10), alg.literal(20)).is_err());
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_eval_empty_block() {
    let alg = StmtEval::new();
    assert_eq!(alg.block(vec![]).eval(), Ok(Value::Unit));
}

#[test]
fn test_eval_single_item_block() {
    let ints = IntEval::new();
    let alg = StmtEval::new();
    let b = alg.block(vec![alg.expr_stmt(ints.literal(9))]);
    assert_eq!(b.eval(), Ok(Value::Int(9)));
}

#[test]
fn test_eval_assign_then_var() {
    let ints = IntEval::new();
    let alg = StmtEval::new();
    let b = alg.block(vec![alg.assign("x", ints.literal(5)), alg.var("x")]);
    assert_eq!(b.eval(), Ok(Value::Int(5)));
}

#[test]
fn test_eval_reassign() {
    let ints = IntEval::new();
    let alg = StmtEval::new();
    let b = alg.block(vec![
        alg.assign("x", ints.literal(1)),
        alg.assign("x", ints.add(alg.var("x"), ints.literal(10))),
        alg.var("x"),
    ]);
    assert_eq!(b.eval(), Ok(Value::Int(11)));
    assert_eq!(alg.store().get("x"), Some(Value::Int(11)));
}

#[test]
fn test_eval_undefined_variable() {
    let alg = StmtEval::new();
    assert_eq!(
        alg.var("nope").eval(),
        Err(EvalError::UndefinedVariable("nope".to_string()))
    );
}

#[test]
fn test_eval_assignment_happens_at_eval_time() {
    let ints = IntEval::new();
    let alg = StmtEval::new();
    let stmt = alg.assign("later", ints.literal(1));
    assert!(alg.store().is_empty());
    stmt.eval().unwrap();
    assert_eq!(alg.store().get("later"), Some(Value::Int(1)));
}

#[test]
fn test_eval_untaken_assignment_has_no_effect() {
    let alg = Union::new(IntBoolEval::new(), StmtEval::new()).unwrap();
    let e = alg
        .iff(
            alg.boolean(false),
            alg.assign("x", alg.literal(1)),
            alg.literal(0),
        )
        .unwrap();
    assert_eq!(e.eval(), Ok(Value::Int(0)));
    assert_eq!(alg.right().store().get("x"), None);
}

#[test]
fn test_eval_variable_predicate_checked_at_runtime() {
    let alg = Union::new(IntBoolEval::new(), StmtEval::new()).unwrap();
    let b = alg.block(vec![
        alg.assign("flag", alg.literal(3)),
        alg.iff(alg.var("flag"), alg.literal(1), alg.literal(2)).unwrap(),
    ]);
    assert_eq!(
        b.eval(),
        Err(EvalError::TypeMismatch { expected: "bool", found: "int" })
    );
}
