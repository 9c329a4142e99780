mod common;

use common::{Env, Samples, approx_eq, eval};
use sxcore::prelude::*;

fn raw1(op: Operation, x: &Sx) -> Sx {
    Sx::unary(op, x).unwrap()
}

fn raw2(op: Operation, x: &Sx, y: &Sx) -> Sx {
    Sx::binary(op, x, y).unwrap()
}

/// A rewrite under test: the expression built through the rules and the same expression
/// built node by node.
struct Case {
    name: &'static str,
    simplified: Sx,
    naive: Sx,
}

fn cases(x: &Sx, y: &Sx) -> Vec<Case> {
    use Operation::*;
    let c = |v: f64| Sx::constant(v);
    let (zero, one, two, m1) = (Sx::zero(), Sx::one(), Sx::two(), Sx::minus_one());
    let neg = |e: &Sx| raw1(Neg, e);

    macro_rules! case {
        ($name:literal, $simplified:expr, $naive:expr) => {
            Case {
                name: $name,
                simplified: $simplified,
                naive: $naive,
            }
        };
    }

    vec![
        case!("x+0", x + &zero, raw2(Add, x, &zero)),
        case!("0+x", &zero + x, raw2(Add, &zero, x)),
        case!("x-0", x - &zero, raw2(Sub, x, &zero)),
        case!("0-x", &zero - x, raw2(Sub, &zero, x)),
        case!("x-x", x - x, raw2(Sub, x, x)),
        case!("x/x", x / x, raw2(Div, x, x)),
        case!("x+(-y)", x + &neg(y), raw2(Add, x, &neg(y))),
        case!("(-x)+y", &neg(x) + y, raw2(Add, &neg(x), y)),
        case!("x-(-y)", x - &neg(y), raw2(Sub, x, &neg(y))),
        case!("-(-x)", -&neg(x), neg(&neg(x))),
        case!("x*1", x * &one, raw2(Mul, x, &one)),
        case!("1*x", &one * x, raw2(Mul, &one, x)),
        case!("x*0", x * &zero, raw2(Mul, x, &zero)),
        case!("x*(-1)", x * &m1, raw2(Mul, x, &m1)),
        case!("(-1)*x", &m1 * x, raw2(Mul, &m1, x)),
        case!("x*3", x * 3.0, raw2(Mul, x, &c(3.0))),
        case!("x/1", x / &one, raw2(Div, x, &one)),
        case!("0/x", &zero / x, raw2(Div, &zero, x)),
        case!("1/(1/x)", &one / &(&one / x), raw2(Div, &one, &raw2(Div, &one, x))),
        case!(
            "(2/x)*x",
            &raw2(Div, &two, x) * x,
            raw2(Mul, &raw2(Div, &two, x), x)
        ),
        case!(
            "x*(2/x)",
            x * &raw2(Div, &two, x),
            raw2(Mul, x, &raw2(Div, &two, x))
        ),
        case!(
            "0.5x+0.5x",
            &raw2(Mul, &c(0.5), x) + &raw2(Mul, &c(0.5), x),
            raw2(Add, &raw2(Mul, &c(0.5), x), &raw2(Mul, &c(0.5), x))
        ),
        case!(
            "x/2+x/2",
            &raw2(Div, x, &two) + &raw2(Div, x, &two),
            raw2(Add, &raw2(Div, x, &two), &raw2(Div, x, &two))
        ),
        case!(
            "x-(x-y)",
            x - &raw2(Sub, x, y),
            raw2(Sub, x, &raw2(Sub, x, y))
        ),
        case!(
            "x*(1/y)",
            x * &raw1(Inv, y),
            raw2(Mul, x, &raw1(Inv, y))
        ),
        case!(
            "(1/x)*y",
            &raw1(Inv, x) * y,
            raw2(Mul, &raw1(Inv, x), y)
        ),
        case!(
            "2*(0.5*x)",
            &two * &raw2(Mul, &c(0.5), x),
            raw2(Mul, &two, &raw2(Mul, &c(0.5), x))
        ),
        case!(
            "4*(x/4)",
            &c(4.0) * &raw2(Div, x, &c(4.0)),
            raw2(Mul, &c(4.0), &raw2(Div, x, &c(4.0)))
        ),
        case!(
            "(x+x)/2",
            &raw2(Add, x, x) / &two,
            raw2(Div, &raw2(Add, x, x), &two)
        ),
        case!(
            "(x*y)/x",
            &raw2(Mul, x, y) / x,
            raw2(Div, &raw2(Mul, x, y), x)
        ),
        case!(
            "(x*y)/y",
            &raw2(Mul, x, y) / y,
            raw2(Div, &raw2(Mul, x, y), y)
        ),
        case!("1/x", &one / x, raw2(Div, &one, x)),
        case!(
            "x/(1/y)",
            x / &raw1(Inv, y),
            raw2(Div, x, &raw1(Inv, y))
        ),
        case!(
            "(x+x)/(y+y)",
            &raw2(Add, x, x) / &raw2(Add, y, y),
            raw2(Div, &raw2(Add, x, x), &raw2(Add, y, y))
        ),
        case!(
            "(x/4)/0.25",
            &raw2(Div, x, &c(4.0)) / &c(0.25),
            raw2(Div, &raw2(Div, x, &c(4.0)), &c(0.25))
        ),
        case!(
            "x/(3*x)",
            x / &raw2(Mul, &c(3.0), x),
            raw2(Div, x, &raw2(Mul, &c(3.0), x))
        ),
        case!("(-x)/x", &neg(x) / x, raw2(Div, &neg(x), x)),
        case!("x/(-x)", x / &neg(x), raw2(Div, x, &neg(x))),
        case!("(-x)/(-x)", &neg(x) / &neg(x), raw2(Div, &neg(x), &neg(x))),
        case!("inv(inv(x))", raw1(Inv, x).inv(), raw1(Inv, &raw1(Inv, x))),
        case!("x^0", x.powi(0), raw2(ConstPow, x, &zero)),
        case!("x^1", x.powi(1), raw2(ConstPow, x, &one)),
        case!("x^4", x.powi(4), raw2(ConstPow, x, &c(4.0))),
        case!("x^7", x.powi(7), raw2(ConstPow, x, &c(7.0))),
        case!("x^-2", x.powi(-2), raw2(ConstPow, x, &c(-2.0))),
        case!("x^0.5", x.powf(0.5), raw2(ConstPow, x, &c(0.5))),
        case!("sqrt(x*x)", raw2(Mul, x, x).sqrt(), raw1(Sqrt, &raw2(Mul, x, x))),
        case!("|x*x|", raw2(Mul, x, x).fabs(), raw1(Fabs, &raw2(Mul, x, x))),
        case!("||x||", raw1(Fabs, x).fabs(), raw1(Fabs, &raw1(Fabs, x))),
        case!("|2|", two.fabs(), raw1(Fabs, &two)),
        case!("sin(0)", zero.sin(), raw1(Sin, &zero)),
        case!("cos(0)", zero.cos(), raw1(Cos, &zero)),
        case!("tan(0)", zero.tan(), raw1(Tan, &zero)),
        case!("sinh(0)", zero.sinh(), raw1(Sinh, &zero)),
        case!("cosh(0)", zero.cosh(), raw1(Cosh, &zero)),
        case!("tanh(0)", zero.tanh(), raw1(Tanh, &zero)),
        case!("sqrt(1)", one.sqrt(), raw1(Sqrt, &one)),
        case!("fmin(x,x)", x.fmin(x), raw2(Fmin, x, x)),
        case!("fmax(x,x)", x.fmax(x), raw2(Fmax, x, x)),
        case!(
            "x*x>=0",
            raw2(Mul, x, x).ge(&zero),
            raw1(Step, &raw2(Sub, &raw2(Mul, x, x), &zero))
        ),
        case!(
            "|x|>=0",
            raw1(Fabs, x).ge(&zero),
            raw1(Step, &raw2(Sub, &raw1(Fabs, x), &zero))
        ),
        case!(
            "!!x",
            x.logic_not().logic_not(),
            raw2(Sub, &one, &raw2(Sub, &one, x))
        ),
    ]
}

#[test]
fn rewrites_preserve_values() {
    let x = Sx::symbol("x");
    let y = Sx::symbol("y");
    let mut samples = Samples::new(0x5eed);
    let cases = cases(&x, &y);

    for _ in 0..64 {
        let mut env = Env::default();
        env.bind(&x, samples.next()).bind(&y, samples.next());

        for case in &cases {
            let Some(expected) = eval(&case.naive, &env) else {
                continue;
            };
            let actual = eval(&case.simplified, &env)
                .unwrap_or_else(|| panic!("{}: simplified form is not finite", case.name));
            assert!(
                approx_eq(expected, actual),
                "{}: {} evaluates to {actual}, {} to {expected}",
                case.name,
                case.simplified,
                case.naive
            );
        }
    }
}

#[test]
fn rewrites_return_existing_nodes() {
    let x = Sx::symbol("x");
    let zero = Sx::zero();
    assert!((&x + &zero).is_equal(&x));
    assert!((&zero + &x).is_equal(&x));
    assert!((&x - &zero).is_equal(&x));
    assert!((&x - &x).is_equal(&zero));
    assert!((&x / &x).is_one());
    assert!((&(-&x) / &x).is_equal(&Sx::constant(-1.0)));
    assert!((&x / &(-&x)).is_minus_one());
    assert!((&(-&x) / &(-&x)).is_one());
    assert!((&x * &zero).is_zero());
    assert!((&Sx::one() / &(&Sx::one() / &x)).is_equal(&x));
}

#[test]
fn sign_folding_builds_the_expected_operator() {
    let x = Sx::symbol("x");
    let y = Sx::symbol("y");

    let e = &x + &(-&y);
    assert!(e.is_op(Operation::Sub));
    assert!(e.dep(0).unwrap().is_equal(&x));
    assert!(e.dep(1).unwrap().is_equal(&y));

    let e = &(-&x) + &y;
    assert!(e.is_op(Operation::Sub));
    assert!(e.dep(0).unwrap().is_equal(&y));
    assert!(e.dep(1).unwrap().is_equal(&x));

    let e = &x - &(-&y);
    assert!(e.is_op(Operation::Add));

    let e = Sx::zero() - &x;
    assert!(e.is_op(Operation::Neg));
    assert!(e.dep(0).unwrap().is_equal(&x));
}

#[test]
fn negation_and_absolute_value_are_idempotent() {
    let x = Sx::symbol("x");
    let e = (&x * &Sx::symbol("y")).sin();
    assert!((-(-&e)).is_equal(&e));
    let abs = e.fabs();
    assert!(abs.fabs().is_equal(&abs));
    assert!((-Sx::zero()).is_zero());
    assert!((-Sx::one()).is_minus_one());
    assert!((-Sx::minus_one()).is_one());
}

#[test]
fn constants_move_to_the_left_of_products() {
    let x = Sx::symbol("x");
    let e = &x * 5.0;
    assert!(e.dep(0).unwrap().has_same_value(&Sx::constant(5.0)));
    assert!(e.dep(1).unwrap().is_equal(&x));
    assert_eq!(e.to_string(), "(5*x)");
}

#[test]
fn zero_over_zero_is_nan() {
    // The zero-divisor check runs before the self-cancellation check.
    assert!((Sx::zero() / Sx::zero()).is_nan());
    let x = Sx::symbol("x");
    let d = &x - &x;
    assert!((&d / &d).is_nan());
    assert!((&x / 0.0).is_nan());
    assert!(Sx::zero().inv().is_nan());
}

#[test]
fn folding_follows_identity_rules() {
    assert!((Sx::constant(2.0) + Sx::constant(3.0)).is_equal(&Sx::integer(5)));
    assert!((Sx::constant(1.5) * Sx::constant(2.0)).has_same_value(&Sx::constant(3.0)));
    assert!((Sx::one() / Sx::zero()).is_nan());
    assert!(Sx::constant(1e308).powi(2).is_inf());
    assert!(Sx::constant(-2.0).sqrt().is_nan());
    assert!(Sx::constant(-4.0).sign().is_minus_one());
    assert!(Sx::constant(0.3).erf().is_op(Operation::Erf));
    assert!(Sx::zero().erf().is_zero());
    assert!(Sx::zero().erfinv().is_zero());
}

#[test]
fn division_rewrites() {
    let x = Sx::symbol("x");
    let y = Sx::symbol("y");

    let e = &x / &(&x * 3.0);
    assert!(e.has_same_value(&Sx::constant(1.0 / 3.0)));

    let e = &(&x + &x) / &(&y + &y);
    assert!(e.is_op(Operation::Div));
    assert!(e.dep(0).unwrap().is_equal(&x));
    assert!(e.dep(1).unwrap().is_equal(&y));

    let e = &x / &y.inv();
    assert!(e.is_op(Operation::Mul));

    let e = &(&x / 4.0) / 0.25;
    assert!(e.is_equal(&x));
}

#[test]
fn derived_helpers() {
    let x = Sx::symbol("x");
    let l = x.log10();
    assert!(l.is_op(Operation::Mul));
    assert!(l.dep(1).unwrap().is_op(Operation::Log));

    let c = Sx::symbol("c");
    let y = Sx::symbol("y");
    let sel = if_else(&c, &x, &y);
    let mut env = Env::default();
    env.bind(&c, 1.0).bind(&x, 2.5).bind(&y, -4.0);
    assert!(approx_eq(eval(&sel, &env).unwrap(), 2.5));
    env.bind(&c, 0.0);
    assert!(approx_eq(eval(&sel, &env).unwrap(), -4.0));

    assert!(x.constpow(&Sx::two()).is_op(Operation::ConstPow));
    assert!(x.printme(&y).is_op(Operation::Printme));
}
