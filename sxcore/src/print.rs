//! Bounded rendering of expressions.
//!
//! Role
//! - Render an expression as a fully parenthesized infix string, either plain (any
//!   [`fmt::Write`]) or colored (any [`termcolor::WriteColor`]).
//! - Bound the work done on heavily shared graphs: every visited expression consumes one
//!   unit of a caller supplied budget, and once the budget is spent the remaining subgraphs
//!   are rendered as [`ELISION_MARKER`].
//!
//! Shared subgraphs are expanded once per path reaching them, so the budget bounds the output
//! of a graph whose tree expansion is exponential in its node count. The traversal keeps its
//! own stack and does not recurse.
//!
//! Notation
//! - constants and symbols print as themselves;
//! - `(x+y)`, `(x-y)`, `(x*y)`, `(x/y)`, `(x==y)` for infix operators;
//! - `(-x)`, `(1/x)` for negation and reciprocal, `(x>=0)` for the unit step;
//! - `name(x)` or `name(x,y)` for everything else, e.g. `sin(x)`, `pow(x,n)`.
use std::{
    fmt,
    io::{self, Write},
    sync::atomic::{AtomicI64, Ordering},
};

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::{
    magic::{DEFAULT_MAX_NUM_CALLS_IN_PRINT, ELISION_MARKER},
    node::NodeKind,
    operation::Notation,
    sx::Sx,
    utils::conf::ColorMode,
};

static MAX_NUM_CALLS_IN_PRINT: AtomicI64 = AtomicI64::new(DEFAULT_MAX_NUM_CALLS_IN_PRINT);

/// Set the budget used by [`Display`](fmt::Display) and the stdout helpers.
pub fn set_max_num_calls_in_print(num: i64) {
    MAX_NUM_CALLS_IN_PRINT.store(num, Ordering::Relaxed);
}

/// Budget used by [`Display`](fmt::Display) and the stdout helpers.
pub fn max_num_calls_in_print() -> i64 {
    MAX_NUM_CALLS_IN_PRINT.load(Ordering::Relaxed)
}

/// Styles attached to the pieces of a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct, // commas, elision marker
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Function, // sin, pow, fmax, ...
    Operator, // +, -, *, /, ==, >=0
    Ident,    // symbols
    Constant,
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Punct => {
                s.set_dimmed(true);
            }
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    _ => Color::Magenta,
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Function => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green)).set_bold(true);
            }
            Style::Constant => {
                s.set_fg(Some(Color::Magenta));
            }
        }
        s
    }
}

enum Frame<'a> {
    Expr(&'a Sx, u8),
    Text(Style, &'static str),
}

/// Walk `root` in print order, handing every piece of text to `emit`.
fn render<E>(
    root: &Sx,
    remaining_calls: &mut i64,
    emit: &mut impl FnMut(Style, &str) -> Result<(), E>,
) -> Result<(), E> {
    let mut stack = vec![Frame::Expr(root, 0)];

    while let Some(frame) = stack.pop() {
        let (sx, depth) = match frame {
            Frame::Text(style, text) => {
                emit(style, text)?;
                continue;
            }
            Frame::Expr(sx, depth) => (sx, depth),
        };

        if *remaining_calls <= 0 {
            emit(Style::Punct, ELISION_MARKER)?;
            continue;
        }
        *remaining_calls -= 1;

        match sx.kind() {
            NodeKind::Constant(c) => emit(Style::Constant, &c.to_string())?,
            NodeKind::Symbol(name) => emit(Style::Ident, &**name)?,
            NodeKind::Operation { op, deps } => {
                let inner = depth.wrapping_add(1);
                let close = Frame::Text(Style::Paren(depth), ")");
                match (op.notation(), deps.as_slice()) {
                    (Notation::Infix(sym), [x, y]) => {
                        emit(Style::Paren(depth), "(")?;
                        stack.extend([
                            close,
                            Frame::Expr(y, inner),
                            Frame::Text(Style::Operator, sym),
                            Frame::Expr(x, inner),
                        ]);
                    }
                    (Notation::Prefix(sym), [x]) => {
                        emit(Style::Paren(depth), "(")?;
                        emit(Style::Operator, sym)?;
                        stack.extend([close, Frame::Expr(x, inner)]);
                    }
                    (Notation::Postfix(sym), [x]) => {
                        emit(Style::Paren(depth), "(")?;
                        stack.extend([
                            close,
                            Frame::Text(Style::Operator, sym),
                            Frame::Expr(x, inner),
                        ]);
                    }
                    (Notation::Call(name), deps) => {
                        emit(Style::Function, name)?;
                        emit(Style::Paren(depth), "(")?;
                        stack.push(close);
                        for (i, dep) in deps.iter().enumerate().rev() {
                            stack.push(Frame::Expr(dep, inner));
                            if i > 0 {
                                stack.push(Frame::Text(Style::Punct, ","));
                            }
                        }
                    }
                    // Arity is checked when the node is built.
                    (_, deps) => {
                        emit(Style::Paren(depth), "(")?;
                        emit(Style::Operator, &op.to_string())?;
                        stack.push(close);
                        stack.extend(deps.iter().rev().map(|dep| Frame::Expr(dep, inner)));
                    }
                }
            }
        }
    }

    Ok(())
}

impl Sx {
    /// Render into `w`, consuming `remaining_calls` by one per expression visited.
    pub fn print<W: fmt::Write + ?Sized>(
        &self,
        w: &mut W,
        remaining_calls: &mut i64,
    ) -> fmt::Result {
        render(self, remaining_calls, &mut |_, text| w.write_str(text))
    }

    /// Colored rendering into a [`WriteColor`] sink.
    pub fn print_colored<W: WriteColor + ?Sized>(
        &self,
        w: &mut W,
        remaining_calls: &mut i64,
    ) -> io::Result<()> {
        render(self, remaining_calls, &mut |style, text| {
            w.set_color(&style.to_color_spec())?;
            w.write_all(text.as_bytes())?;
            w.reset()
        })
    }

    /// Plain rendering with an explicit budget.
    pub fn to_string_with_budget(&self, budget: i64) -> String {
        let mut remaining_calls = budget;
        let mut buf = String::new();
        // Writing to a String never fails.
        let _ = self.print(&mut buf, &mut remaining_calls);
        buf
    }

    /// Print to stdout followed by a newline, using the global budget.
    pub fn print_stdout(&self, color: ColorMode) -> io::Result<()> {
        let stdout = StandardStream::stdout(color.into());
        let mut stdout = stdout.lock();
        let mut remaining_calls = max_num_calls_in_print();
        self.print_colored(&mut stdout, &mut remaining_calls)?;
        writeln!(stdout)
    }
}

impl fmt::Display for Sx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut remaining_calls = max_num_calls_in_print();
        self.print(f, &mut remaining_calls)
    }
}

impl fmt::Debug for Sx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sx({self})")
    }
}
