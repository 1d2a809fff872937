//! Renderable snapshot of the flow.

use super::config::format_amount;
use super::state::PaymentMethod;
use shared_types::Balance;
use std::fmt;

/// Everything a front end needs to draw the current screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowView {
    pub scanner_visible: bool,
    pub form_visible: bool,
    pub ticket: Option<String>,
    pub balance_text: String,
    pub amounts: Vec<AmountOption>,
    /// Empty unless the method step is showing
    pub payment_methods: Vec<MethodOption>,
    pub button: ActionButton,
    pub banner: StatusBanner,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmountOption {
    pub amount: Balance,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodOption {
    pub method: PaymentMethod,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub enabled: bool,
}

impl ActionButton {
    pub fn enabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub text: String,
    pub kind: BannerKind,
    pub visible: bool,
}

impl StatusBanner {
    pub fn hidden() -> Self {
        Self {
            text: String::new(),
            kind: BannerKind::Success,
            visible: false,
        }
    }
}

impl fmt::Display for FlowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scanner_visible {
            writeln!(f, "[scanner] point the camera at the ticket QR")?;
        }

        if self.form_visible {
            writeln!(
                f,
                "ticket:  {}",
                self.ticket.as_deref().unwrap_or_default()
            )?;
            writeln!(f, "balance: {}", self.balance_text)?;

            let amounts: Vec<String> = self
                .amounts
                .iter()
                .map(|option| {
                    let label = format!("${}", format_amount(option.amount));
                    if option.selected {
                        format!("[{}]", label)
                    } else {
                        format!(" {} ", label)
                    }
                })
                .collect();
            writeln!(f, "amounts: {}", amounts.join(" "))?;

            if !self.payment_methods.is_empty() {
                let methods: Vec<String> = self
                    .payment_methods
                    .iter()
                    .map(|option| {
                        if option.selected {
                            format!("[{}]", option.label)
                        } else {
                            format!(" {} ", option.label)
                        }
                    })
                    .collect();
                writeln!(f, "method:  {}", methods.join(" "))?;
            }

            let marker = if self.button.enabled { ">" } else { "x" };
            writeln!(f, "{} {}", marker, self.button.label)?;
        }

        if self.banner.visible {
            let tag = match self.banner.kind {
                BannerKind::Success => "ok",
                BannerKind::Error => "error",
            };
            writeln!(f, "({}) {}", tag, self.banner.text)?;
        }

        Ok(())
    }
}
