//! Integration tests for combined algebras.

use objalg_algebra::{Algebra, Combine, Factory, IntAlg, IntBoolAlg, Pair, StmtAlg, Union};
use objalg_eval::{Eval, IntBoolEval, StmtEval, Value};
use objalg_fmt::{IntBoolShow, Show, StmtShow};
use objalg_syntax::{Inspect, NodeKind};
use pretty_assertions::assert_eq;

fn sum<A: IntAlg>(alg: &A) -> A::Repr {
    alg.add(alg.literal(1), alg.literal(2))
}

#[test]
fn test_combine_eval_and_show() {
    let alg = Combine::new(IntBoolEval::new(), IntBoolShow::new());
    let e = sum(&alg);
    assert_eq!(e.a.eval(), Ok(Value::Int(3)));
    assert_eq!(e.b.show(), "1 + 2");
}

#[test]
fn test_combine_matches_separate_builds() {
    let eval = IntBoolEval::new();
    let show = IntBoolShow::new();
    let both = Combine::new(IntBoolEval::new(), IntBoolShow::new());

    let combined = both
        .iff(both.boolean(false), sum(&both), both.literal(-1))
        .unwrap();
    let evaluated = eval.iff(eval.boolean(false), sum(&eval), eval.literal(-1)).unwrap();
    let shown = show.iff(show.boolean(false), sum(&show), show.literal(-1)).unwrap();

    assert_eq!(combined.a.eval(), evaluated.eval());
    assert_eq!(combined.b.show(), shown.show());
}

#[test]
fn test_combine_nested_pairs() {
    let alg = Combine::new(
        Combine::new(IntBoolEval::new(), IntBoolShow::new()),
        Factory::new(),
    );
    let e = sum(&alg);
    let Pair { a: inner, b: tree } = e;
    assert_eq!(inner.a.eval(), Ok(Value::Int(3)));
    assert_eq!(inner.b.show(), "1 + 2");
    assert_eq!(tree, sum(&Factory::new()));
}

#[test]
fn test_combine_propagates_invalid_argument() {
    let alg = Combine::new(IntBoolEval::new(), IntBoolShow::new());
    assert!(alg.iff(alg.literal(0), alg.literal(1), alg.literal(2)).is_err());
}

#[test]
fn test_combine_statements() {
    let eval = Union::new(IntBoolEval::new(), StmtEval::new()).unwrap();
    let show = Union::new(IntBoolShow::new(), StmtShow::new()).unwrap();
    let alg = Combine::new(eval, show);

    let b = alg.block(vec![
        alg.assign("x", alg.literal(4)),
        alg.expr_stmt(alg.add(alg.var("x"), alg.var("x"))),
    ]);
    assert_eq!(b.b.show(), "x = 4; x + x");
    assert_eq!(b.a.eval(), Ok(Value::Int(8)));
    assert_eq!(alg.first().right().store().get("x"), Some(Value::Int(4)));
}

#[test]
fn test_pair_inspects_first_half() {
    let alg = Combine::new(IntBoolEval::new(), IntBoolShow::new());
    let e = alg.boolean(true);
    assert_eq!(e.kind(), NodeKind::Boolean);
}

#[test]
fn test_combine_result_kind() {
    let alg = Combine::new(IntBoolEval::new(), IntBoolShow::new());
    assert_eq!(alg.result_kind().name(), "(Eval, Show)");
}
