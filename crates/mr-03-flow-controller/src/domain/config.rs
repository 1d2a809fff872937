//! Flow configuration and localized UI text.

use serde::{Deserialize, Serialize};
use shared_types::Balance;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Recharge amounts offered by default.
pub const DEFAULT_AMOUNTS: [Balance; 4] = [5.0, 10.0, 20.0, 50.0];

/// Flow controller configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FlowConfig {
    /// Ask for a payment method between amount selection and payment
    pub payment_method_step: bool,
    /// Amount buttons, in display order
    pub amounts: Vec<Balance>,
    /// Time the confirmation stays up before the form resets
    pub reset_delay: Duration,
    /// Time a status banner stays visible
    pub banner_duration: Duration,
    pub locale: Locale,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            payment_method_step: false,
            amounts: DEFAULT_AMOUNTS.to_vec(),
            reset_delay: Duration::from_secs(3),
            banner_duration: Duration::from_secs(5),
            locale: Locale::default(),
        }
    }
}

impl FlowConfig {
    /// Configuration with the payment method step enabled
    pub fn with_method_step() -> Self {
        Self {
            payment_method_step: true,
            ..Self::default()
        }
    }
}

/// UI language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Es => &SPANISH,
            Locale::En => &ENGLISH,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Es => f.write_str("es"),
            Locale::En => f.write_str("en"),
        }
    }
}

/// User-visible strings for one locale
#[derive(Debug)]
pub struct Messages {
    pay_prefix: &'static str,
    pub continue_label: &'static str,
    pub processing: &'static str,
    pub completed: &'static str,
    pub pay_now: &'static str,
    pub retry: &'static str,
    pub card: &'static str,
    pub wallet: &'static str,
    pub connection_error: &'static str,
    pub invalid_signature: &'static str,
    pub recharge_ok: &'static str,
    pub recharge_failed: &'static str,
}

impl Messages {
    /// `PAY $10`, `PAY $7.50`
    pub fn pay_label(&self, amount: Balance) -> String {
        format!("{} ${}", self.pay_prefix, format_amount(amount))
    }
}

static SPANISH: Messages = Messages {
    pay_prefix: "PAGAR",
    continue_label: "CONTINUAR",
    processing: "PROCESANDO PAGO",
    completed: "PAGO COMPLETADO",
    pay_now: "PAGAR AHORA",
    retry: "REINTENTAR PAGO",
    card: "Tarjeta",
    wallet: "Billetera",
    connection_error: "Error al conectar con el servidor.",
    invalid_signature: "Firma de boleto inválida",
    recharge_ok: "¡Recarga Exitosa! Tu saldo se ha actualizado.",
    recharge_failed: "Error al procesar el pago. Intenta de nuevo.",
};

static ENGLISH: Messages = Messages {
    pay_prefix: "PAY",
    continue_label: "CONTINUE",
    processing: "PROCESSING PAYMENT",
    completed: "PAYMENT COMPLETE",
    pay_now: "PAY NOW",
    retry: "RETRY PAYMENT",
    card: "Card",
    wallet: "Wallet",
    connection_error: "Could not connect to the server.",
    invalid_signature: "Invalid ticket signature",
    recharge_ok: "Recharge successful! Your balance has been updated.",
    recharge_failed: "Payment failed. Please try again.",
};

/// Whole amounts print without decimals, fractional ones with two.
pub fn format_amount(amount: Balance) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}
