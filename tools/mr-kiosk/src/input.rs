//! Kiosk command parsing.

use mr_03_flow_controller::{FlowEvent, PaymentMethod};
use shared_types::{is_valid_recharge_amount, Balance};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  scan <payload>        decoded QR text (ticket id or link with ?id=)
  amount <n>            choose a recharge amount
  method card|wallet    choose a payment method
  pay                   press the action button
  show                  print the screen
  help                  this text
  quit                  exit";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Event(FlowEvent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not a valid amount: {0}")]
    InvalidAmount(String),
    #[error("{0}")]
    InvalidMethod(String),
}

/// Parse one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Input>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let input = match command.to_ascii_lowercase().as_str() {
        "scan" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("scan"));
            }
            Input::Event(FlowEvent::ScanSucceeded(rest.to_string()))
        }
        "amount" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("amount"));
            }
            let amount: Balance = rest
                .trim_start_matches('$')
                .parse()
                .map_err(|_| InputError::InvalidAmount(rest.to_string()))?;
            if !is_valid_recharge_amount(amount) {
                return Err(InputError::InvalidAmount(rest.to_string()));
            }
            Input::Event(FlowEvent::AmountSelected(amount))
        }
        "method" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("method"));
            }
            let method: PaymentMethod = rest.parse().map_err(InputError::InvalidMethod)?;
            Input::Event(FlowEvent::PaymentMethodSelected(method))
        }
        "pay" => Input::Event(FlowEvent::ActionPressed),
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };

    Ok(Some(input))
}
