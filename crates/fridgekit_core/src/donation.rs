//! Pure state for the companion donation widget.
//!
//! # Responsibility
//! - Validate donation amounts and convert decimal ETH text to wei.
//! - Track the one-shot lifecycle of a single donation attempt.
//!
//! # Invariants
//! - This module shares no mutable state with the inventory store; payment
//!   transmission itself stays with an external collaborator.
//! - Illegal lifecycle transitions are rejected, never applied partially.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed recipient address for donations.
pub const DONATION_RECIPIENT: &str = "0x3f9B873aC41E33054e6aF55221aA0e5aFf8d72EC";

/// Preset amounts offered by the widget, in decimal ETH.
pub const PRESET_AMOUNTS_ETH: &[&str] = &["0.0003", "0.0006"];

const WEI_DECIMALS: u32 = 18;

pub type DonationResult<T> = Result<T, DonationError>;

/// Donation-layer error for amount parsing and lifecycle misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationError {
    /// Amount text is empty, malformed, over-precise, or too large.
    InvalidAmount { input: String, message: String },
    /// Lifecycle call does not apply to the current state.
    InvalidTransition {
        from: &'static str,
        attempted: &'static str,
    },
}

impl Display for DonationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount { input, message } => {
                write!(f, "invalid donation amount `{input}`: {message}")
            }
            Self::InvalidTransition { from, attempted } => {
                write!(f, "cannot {attempted} a donation in state `{from}`")
            }
        }
    }
}

impl Error for DonationError {}

/// Converts a decimal-ETH string to wei.
///
/// # Contract
/// - Accepts plain decimals such as `"1"`, `"0.0003"`, `".5"`.
/// - At most 18 fractional digits; no sign, exponent, or grouping.
///
/// # Errors
/// - `DonationError::InvalidAmount` for empty, malformed, over-precise, or
///   overflowing input.
pub fn parse_ether(text: &str) -> DonationResult<u128> {
    let trimmed = text.trim();
    let invalid = |message: &str| DonationError::InvalidAmount {
        input: text.to_string(),
        message: message.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("amount is empty"));
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("no digits"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid("expected only digits and at most one decimal point"));
    }
    if fraction.len() > WEI_DECIMALS as usize {
        return Err(invalid("more than 18 fractional digits"));
    }

    let whole_wei = if whole.is_empty() {
        0u128
    } else {
        let units: u128 = whole.parse().map_err(|_| invalid("integer part too large"))?;
        units
            .checked_mul(10u128.pow(WEI_DECIMALS))
            .ok_or_else(|| invalid("amount overflows wei range"))?
    };

    let fraction_wei = if fraction.is_empty() {
        0u128
    } else {
        let digits: u128 = fraction
            .parse()
            .map_err(|_| invalid("fractional part too large"))?;
        digits * 10u128.pow(WEI_DECIMALS - fraction.len() as u32)
    };

    whole_wei
        .checked_add(fraction_wei)
        .ok_or_else(|| invalid("amount overflows wei range"))
}

/// One-shot donation lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationState {
    /// Nothing in flight.
    Idle,
    /// Transmission handed to the external collaborator.
    Pending { amount_wei: u128 },
    /// Completed; `tx` is the opaque transaction reference.
    Thanked { tx: String },
    /// Rejected or aborted by the collaborator.
    Failed { reason: String },
}

impl DonationState {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending { .. } => "pending",
            Self::Thanked { .. } => "thanked",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Tracks a single donation attempt from request to outcome.
///
/// Completion and failure arrive as one-shot notifications from the
/// transmission collaborator; this type only records them.
#[derive(Debug)]
pub struct DonationFlow {
    state: DonationState,
}

impl DonationFlow {
    pub fn new() -> Self {
        Self {
            state: DonationState::Idle,
        }
    }

    pub fn state(&self) -> &DonationState {
        &self.state
    }

    /// Starts a donation for the given decimal-ETH amount.
    ///
    /// # Errors
    /// - `InvalidAmount` when the text does not parse.
    /// - `InvalidTransition` unless the flow is idle; a pending attempt must
    ///   resolve first, and a terminal outcome must be acknowledged before a
    ///   new attempt can start.
    pub fn begin(&mut self, amount_text: &str) -> DonationResult<u128> {
        if !matches!(self.state, DonationState::Idle) {
            return Err(self.transition_error("begin"));
        }

        let amount_wei = parse_ether(amount_text)?;
        self.state = DonationState::Pending { amount_wei };
        Ok(amount_wei)
    }

    /// Records the one-shot completion notification.
    pub fn confirm(&mut self, tx: impl Into<String>) -> DonationResult<()> {
        if !matches!(self.state, DonationState::Pending { .. }) {
            return Err(self.transition_error("confirm"));
        }
        self.state = DonationState::Thanked { tx: tx.into() };
        Ok(())
    }

    /// Records the one-shot failure notification.
    pub fn fail(&mut self, reason: impl Into<String>) -> DonationResult<()> {
        if !matches!(self.state, DonationState::Pending { .. }) {
            return Err(self.transition_error("fail"));
        }
        self.state = DonationState::Failed {
            reason: reason.into(),
        };
        Ok(())
    }

    /// Returns a terminal state to idle so a new attempt can start.
    pub fn acknowledge(&mut self) {
        if matches!(
            self.state,
            DonationState::Thanked { .. } | DonationState::Failed { .. }
        ) {
            self.state = DonationState::Idle;
        }
    }

    fn transition_error(&self, attempted: &'static str) -> DonationError {
        DonationError::InvalidTransition {
            from: self.state.as_str(),
            attempted,
        }
    }
}

impl Default for DonationFlow {
    fn default() -> Self {
        Self::new()
    }
}
