use crate::expression::{Expression, Operator};
use crate::generator::ExpressionGenerator;

fn leaves(values: &[u64]) -> Vec<Expression> {
    values.iter().copied().map(Expression::number).collect()
}

fn values_of(numbers: &[Expression]) -> Vec<u64> {
    let mut values: Vec<u64> = numbers.iter().map(Expression::value).collect();
    values.sort_unstable();
    values
}

#[test]
fn generates_all_four_operators_for_a_pair() {
    let ops = ExpressionGenerator::operations(&leaves(&[5, 75]));
    let rendered: Vec<String> = ops.iter().map(|op| op.expression.to_string()).collect();

    assert_eq!(ops.len(), 4);
    assert!(rendered.contains(&"75 + 5".to_string()));
    assert!(rendered.contains(&"75 × 5".to_string()));
    assert!(rendered.contains(&"75 - 5".to_string()));
    assert!(rendered.contains(&"75 ÷ 5".to_string()));
}

#[test]
fn skips_multiplying_and_dividing_by_one() {
    let ops = ExpressionGenerator::operations(&leaves(&[1, 6]));
    let operators: Vec<Option<Operator>> = ops.iter().map(|op| op.expression.operator()).collect();

    assert_eq!(ops.len(), 2);
    assert!(operators.contains(&Some(Operator::Add)));
    assert!(operators.contains(&Some(Operator::Sub)));
}

#[test]
fn skips_non_positive_differences_and_inexact_division() {
    let ops = ExpressionGenerator::operations(&leaves(&[7, 7]));
    let rendered: Vec<String> = ops.iter().map(|op| op.expression.to_string()).collect();

    // 7 + 7, 7 × 7, and 7 ÷ 7 in both directions
    assert_eq!(ops.len(), 4);
    assert!(!ops
        .iter()
        .any(|op| op.expression.operator() == Some(Operator::Sub)));
    assert_eq!(rendered.iter().filter(|s| *s == "7 ÷ 7").count(), 2);

    let ops = ExpressionGenerator::operations(&leaves(&[9, 4]));
    assert!(!ops
        .iter()
        .any(|op| op.expression.operator() == Some(Operator::Div)));
}

#[test]
fn every_operation_respects_node_invariants() {
    let numbers = leaves(&[25, 100, 50, 75, 10, 3]);
    let ops = ExpressionGenerator::operations(&numbers);
    assert!(!ops.is_empty());

    for op in &ops {
        let expr = &op.expression;
        assert!(expr.is_consistent());
        assert_ne!(op.left, op.right);

        if let crate::expression::ExpressionKind::Binary {
            operator,
            left,
            right,
        } = expr.kind()
        {
            match operator {
                Operator::Sub => assert!(left.value() > right.value()),
                Operator::Div => {
                    assert_ne!(right.value(), 1);
                    assert_eq!(left.value() % right.value(), 0);
                }
                Operator::Mul => {
                    assert_ne!(left.value(), 1);
                    assert_ne!(right.value(), 1);
                    assert!(left >= right);
                }
                Operator::Add => assert!(left >= right),
            }
        } else {
            panic!("generated a leaf: {}", expr);
        }
    }
}

#[test]
fn nothing_to_combine_in_small_multisets() {
    assert!(ExpressionGenerator::operations(&[]).is_empty());
    assert!(ExpressionGenerator::operations(&leaves(&[42])).is_empty());
}

#[test]
fn reduce_consumes_entries_by_position() {
    let numbers = leaves(&[7, 7, 3]);
    let ops = ExpressionGenerator::operations(&numbers);

    let sum = ops.iter().find(|op| op.expression.to_string() == "7 + 7");
    assert!(sum.is_some());
    if let Some(op) = sum {
        let next = op.reduce(&numbers);
        assert_eq!(values_of(&next), vec![3, 14]);
    }

    let difference = ops.iter().find(|op| op.expression.to_string() == "7 - 3");
    assert!(difference.is_some());
    if let Some(op) = difference {
        let next = op.reduce(&numbers);
        assert_eq!(values_of(&next), vec![4, 7]);
        assert_eq!(next.len(), 2);
    }
}
