use std::ops::RangeInclusive;

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::expression::{Expression, ExpressionError, Operator};
use crate::generator::answer::Answer;
use crate::generator::config::DivisionPolicy;
use crate::generator::constants::MAX_RESAMPLE_ATTEMPTS;
use crate::generator::errors::GeneratorError;
use crate::utils::divisors_in_range;

fn malformed(operands: &[i64], operators: &[Operator]) -> ExpressionError {
    ExpressionError::MalformedSequence {
        operands: operands.len(),
        operators: operators.len(),
    }
}

/// Draws from `range` until the value is nonzero.
pub(crate) fn sample_nonzero<R: Rng + ?Sized>(
    range: &RangeInclusive<i64>,
    rng: &mut R,
) -> Result<i64, GeneratorError> {
    for attempt in 1..=MAX_RESAMPLE_ATTEMPTS {
        let value = rng.gen_range(range.clone());
        if value != 0 {
            debug!("Resampled divisor {} after {} attempt(s)", value, attempt);
            return Ok(value);
        }
    }
    warn!(
        "No nonzero divisor in {}..={} after {} attempts",
        range.start(),
        range.end(),
        MAX_RESAMPLE_ATTEMPTS
    );
    Err(GeneratorError::RetryExhausted {
        attempts: MAX_RESAMPLE_ATTEMPTS,
    })
}

/// Rewrites right-hand operands of `/` (or the operator itself) so that every
/// division in the sequence is valid under `policy`.
pub(crate) fn enforce_division_safety<R: Rng + ?Sized>(
    operands: &mut [i64],
    operators: &mut [Operator],
    range: &RangeInclusive<i64>,
    policy: DivisionPolicy,
    rng: &mut R,
) -> Result<(), GeneratorError> {
    match policy {
        DivisionPolicy::AllowDecimal => ensure_nonzero_divisors(operands, operators, range, rng),
        DivisionPolicy::WholeNumber => ensure_whole_divisions(operands, operators, range, rng),
    }
}

fn ensure_nonzero_divisors<R: Rng + ?Sized>(
    operands: &mut [i64],
    operators: &[Operator],
    range: &RangeInclusive<i64>,
    rng: &mut R,
) -> Result<(), GeneratorError> {
    for (index, operator) in operators.iter().enumerate() {
        if *operator != Operator::Div {
            continue;
        }
        let rhs = operands.get_mut(index + 1).ok_or_else(|| ExpressionError::MalformedSequence {
            operands: index + 1,
            operators: operators.len(),
        })?;
        if *rhs == 0 {
            *rhs = sample_nonzero(range, rng)?;
        }
    }
    Ok(())
}

// Tracks the running value of the current `*`/`/` term. Under standard
// precedence a divisor has to divide that value, not just its left neighbour.
fn ensure_whole_divisions<R: Rng + ?Sized>(
    operands: &mut [i64],
    operators: &mut [Operator],
    range: &RangeInclusive<i64>,
    rng: &mut R,
) -> Result<(), GeneratorError> {
    if operands.len() != operators.len() + 1 {
        return Err(malformed(operands, operators).into());
    }
    let Some((first, rest)) = operands.split_first_mut() else {
        return Ok(());
    };

    let mut term = i128::from(*first);
    for (operator, rhs) in operators.iter_mut().zip(rest.iter_mut()) {
        match *operator {
            Operator::Add | Operator::Sub => term = i128::from(*rhs),
            Operator::Mul => {
                term = term
                    .checked_mul(i128::from(*rhs))
                    .ok_or(ExpressionError::Overflow)?;
            }
            Operator::Div => {
                if term == 0 {
                    if *rhs == 0 {
                        *rhs = sample_nonzero(range, rng)?;
                    }
                    continue;
                }
                if *rhs == 0 || term % i128::from(*rhs) != 0 {
                    match divisors_in_range(term, range).choose(rng) {
                        Some(&divisor) => {
                            debug!("Replacing divisor {} with {} for term {}", rhs, divisor, term);
                            *rhs = divisor;
                        }
                        None => {
                            debug!("No divisor of {} in range, using multiplication", term);
                            *operator = Operator::Mul;
                            term = term
                                .checked_mul(i128::from(*rhs))
                                .ok_or(ExpressionError::Overflow)?;
                            continue;
                        }
                    }
                }
                term /= i128::from(*rhs);
            }
        }
    }
    Ok(())
}

/// Turns `-` into `+` wherever subtracting the following term would take the
/// running sum below zero. Terms are never negative, so neither is the result.
pub(crate) fn enforce_non_negative(
    operands: &[i64],
    operators: &mut [Operator],
    policy: DivisionPolicy,
) -> Result<(), GeneratorError> {
    for index in 0..operators.len() {
        if operators.get(index) != Some(&Operator::Sub) {
            continue;
        }

        // Prefix ends where the term after this `-` ends
        let end = operators
            .iter()
            .skip(index + 1)
            .position(|op| op.is_additive())
            .map_or(operators.len(), |offset| index + 1 + offset);

        let prefix_operands = operands.get(..=end).ok_or_else(|| malformed(operands, operators))?;
        let prefix_operators = operators.get(..end).ok_or_else(|| malformed(operands, operators))?;
        let prefix = Expression::from_sequence(prefix_operands, prefix_operators)?;

        if Answer::evaluate(&prefix, policy)?.is_negative() {
            debug!("Subtraction at position {} goes negative in '{}', using addition", index, prefix);
            if let Some(op) = operators.get_mut(index) {
                *op = Operator::Add;
            }
        }
    }
    Ok(())
}
