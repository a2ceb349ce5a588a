use crate::{
    Expr, ExprError, NAryOp, OpTag, Render, make, make_binary, make_constant, make_unary,
    make_variable, render,
};

#[test]
fn test_scenario_sum_of_constant_and_power() {
    // add(1, power(sin(2), x))
    let x = make_variable::<i32>("x");
    let sine = make_unary(OpTag::Sin, make_constant(2)).unwrap().unwrap();
    let power = make_binary(OpTag::Power, sine, x).unwrap().unwrap();
    let expr = make_binary(OpTag::Add, make_constant(1), power)
        .unwrap()
        .unwrap();
    assert_eq!(render(&expr), "1 + sin(2)^x");
}

#[test]
fn test_scenario_append_product_to_sum() {
    let x = make_variable::<i32>("x");
    let mut sum = make(OpTag::Add, make_constant(1), Some(x.clone()))
        .unwrap()
        .unwrap();
    let square = make(OpTag::Mult, x.clone(), Some(x)).unwrap().unwrap();

    // narrow before mutating
    let nary = sum.as_nary_mut().expect("add is n-ary");
    nary.push(square);

    assert_eq!(render(&sum), "1 + x + x * x");
}

#[test]
fn test_every_operator_renders() {
    let x = || make_variable::<f64>("x");
    let two = || make_constant(2);
    let cases: Vec<(Expr, &str)> = vec![
        (Expr::negative(x()), "-x"),
        (x().sin(), "sin(x)"),
        (x().cos(), "cos(x)"),
        (x().tan(), "tan(x)"),
        (Expr::add2(x(), two()), "x + 2"),
        (Expr::minus2(x(), two()), "x - 2"),
        (Expr::multiply2(x(), two()), "x * 2"),
        (Expr::divide(x(), two()), "x / 2"),
        (x().pow(two()), "x^2"),
        (Expr::log(two(), x()), "log 2(x)"),
        (Expr::add(x(), two()), "x + 2"),
        (Expr::minus(x(), two()), "x + 2"),
        (Expr::multiply(x(), two()), "x * 2"),
    ];
    for (expr, expected) in cases {
        assert_eq!(render(&expr), expected, "rendering {}", expr.kind_name());
    }
}

#[test]
fn test_nested_functions_and_logs() {
    let x = make_variable::<f64>("x");
    let y = make_variable::<f64>("y");
    let expr = Expr::divide(
        Expr::log(make_constant(10), x.clone().cos()),
        Expr::negative(Expr::add2(y, x.tan())),
    );
    assert_eq!(render(&expr), "log 10(cos(x)) / -y + tan(x)");
}

#[test]
fn test_nary_minus_uses_plus_separator() {
    // n-ary minus output is "+"-joined; this locks the current behavior
    let mut diff = make(OpTag::Minus, make_constant(10), Some(make_constant(3)))
        .unwrap()
        .unwrap();
    diff.append(make_variable::<i32>("k")).unwrap();
    assert_eq!(render(&diff), "10 + 3 + k");

    // the fixed two-operand variant subtracts
    let fixed = make_binary(OpTag::Minus2, make_constant(10), make_constant(3))
        .unwrap()
        .unwrap();
    assert_eq!(render(&fixed), "10 - 3");
}

#[test]
fn test_float_and_unsigned_constants() {
    assert_eq!(render(&make_constant(2.0f64)), "2");
    assert_eq!(render(&make_constant(0.25f32)), "0.25");
    assert_eq!(render(&make_constant(0.1f32)), "0.1");
    assert_eq!(render(&make_constant(-0.0f64)), "-0");
    assert_eq!(render(&make_constant(7u8)), "7");
    assert_eq!(render(&make_constant(-7i16)), "-7");
}

#[test]
fn test_render_builder_matches_free_function() {
    let x = make_variable::<i32>("x");
    let expr = Expr::nary_with(NAryOp::Multiply, x.clone(), [x.clone().sin(), x]);
    assert_eq!(Render::new().render(&expr).unwrap(), render(&expr));
    assert_eq!(
        Render::new().group_nary(true).render(&expr).unwrap(),
        "(x * sin(x) * x)"
    );
}

#[test]
fn test_recursion_limits() {
    let mut deeply_nested = make_variable::<f64>("x");
    for _ in 0..150 {
        deeply_nested = Expr::negative(deeply_nested);
    }

    // Should pass without limits
    let text = Render::new().render(&deeply_nested).unwrap();
    assert_eq!(text.len(), 151);

    // Should fail with the default bounds
    let err = Render::bounded().render(&deeply_nested).unwrap_err();
    assert!(matches!(err, ExprError::MaxDepthExceeded { limit: 100, .. }));
}

#[test]
fn test_render_is_idempotent() {
    let x = make_variable::<i32>("x");
    let expr = Expr::add(Expr::log(x.clone(), x.clone().pow(3)), Expr::negative(x));
    let first = render(&expr);
    let second = render(&expr);
    assert_eq!(first, second);
}

#[test]
fn test_cloned_subtree_is_independent() {
    let x = make_variable::<i32>("x");
    let mut inner = Expr::add(x.clone(), make_constant(1));
    let outer = Expr::multiply2(inner.clone(), x);

    inner.append(make_constant(2)).unwrap();
    assert_eq!(render(&inner), "x + 1 + 2");
    assert_eq!(render(&outer), "x + 1 * x");
}
