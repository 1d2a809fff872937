//! # Recharge Flow Tests
//!
//! The flow controller with its real HTTP client against a live gateway:
//! navigation by URL, both payment variants, error banners and the reset
//! after a confirmed payment.

#[cfg(test)]
mod tests {
    use super::super::support::{unreachable_api_base, TestServer};
    use mr_02_api_gateway::GatewayConfig;
    use mr_03_flow_controller::{
        ActionButton, BannerKind, FlowConfig, FlowController, FlowEvent, FlowState,
        HttpBalanceClient, Locale, PaymentMethod,
    };
    use shared_types::{TicketId, TicketSigner};
    use std::time::Duration;
    use tokio::time::timeout;

    type Controller = FlowController<HttpBalanceClient>;

    fn controller(api_base: &str, config: FlowConfig) -> Controller {
        FlowController::new(config, HttpBalanceClient::new(api_base).unwrap())
    }

    fn english() -> FlowConfig {
        FlowConfig {
            locale: Locale::En,
            reset_delay: Duration::from_millis(50),
            ..FlowConfig::default()
        }
    }

    /// Process events until `done` holds for the state.
    async fn run_until<F>(ctl: &mut Controller, done: F)
    where
        F: Fn(&FlowState) -> bool,
    {
        timeout(Duration::from_secs(5), async {
            while !done(ctl.state()) {
                assert!(ctl.step().await);
            }
        })
        .await
        .expect("flow did not settle within 5s");
    }

    fn awaiting_amount(state: &FlowState) -> bool {
        matches!(state, FlowState::AwaitingAmountSelection { .. })
    }

    fn confirmed(state: &FlowState) -> bool {
        matches!(state, FlowState::Confirmed { .. })
    }

    #[tokio::test]
    async fn test_url_navigation_and_immediate_payment() {
        let server = TestServer::seeded().await;
        let mut ctl = controller(&server.api_base(), english());

        ctl.dispatch(FlowEvent::Started {
            url: Some("http://localhost:5173/?id=METRO-ABC-789".into()),
        });
        assert!(!ctl.view().scanner_visible);
        run_until(&mut ctl, awaiting_amount).await;
        assert_eq!(ctl.view().balance_text, "$25.50");

        ctl.dispatch(FlowEvent::AmountSelected(10.0));
        assert_eq!(ctl.view().button, ActionButton::enabled("PAY $10"));
        ctl.dispatch(FlowEvent::ActionPressed);
        assert_eq!(ctl.view().button, ActionButton::disabled("PROCESSING PAYMENT"));

        run_until(&mut ctl, confirmed).await;
        let view = ctl.view();
        assert_eq!(view.balance_text, "$35.50");
        assert_eq!(view.button, ActionButton::disabled("PAYMENT COMPLETE"));
        assert_eq!(view.banner.kind, BannerKind::Success);

        let stored = server
            .api
            .get_balance(&TicketId::from("METRO-ABC-789"), None)
            .unwrap();
        assert_eq!(stored.balance, 35.5);

        run_until(&mut ctl, awaiting_amount).await;
        assert_eq!(ctl.view().button, ActionButton::disabled("PAY NOW"));
    }

    #[tokio::test]
    async fn test_scan_then_method_step() {
        let server = TestServer::empty().await;
        let mut ctl = controller(
            &server.api_base(),
            FlowConfig {
                payment_method_step: true,
                ..english()
            },
        );

        ctl.dispatch(FlowEvent::Started { url: None });
        assert!(ctl.view().scanner_visible);
        ctl.dispatch(FlowEvent::ScanFailed("blurry".into()));
        ctl.dispatch(FlowEvent::ScanSucceeded("METRO-X".into()));
        run_until(&mut ctl, awaiting_amount).await;
        assert_eq!(ctl.view().balance_text, "$0.00");

        ctl.dispatch(FlowEvent::AmountSelected(50.0));
        assert_eq!(ctl.view().button, ActionButton::enabled("CONTINUE"));
        ctl.dispatch(FlowEvent::ActionPressed);
        assert_eq!(ctl.view().payment_methods.len(), 2);

        ctl.dispatch(FlowEvent::PaymentMethodSelected(PaymentMethod::Card));
        ctl.dispatch(FlowEvent::ActionPressed);
        run_until(&mut ctl, confirmed).await;

        assert_eq!(ctl.state(), &FlowState::Confirmed { new_balance: 50.0 });
        assert_eq!(server.api.ticket_count(), 1);
    }

    #[tokio::test]
    async fn test_server_down_shows_connection_error() {
        let mut ctl = controller(&unreachable_api_base(), FlowConfig::default());

        ctl.dispatch(FlowEvent::Started {
            url: Some("http://localhost:5173/?id=METRO-X".into()),
        });
        run_until(&mut ctl, awaiting_amount).await;

        let view = ctl.view();
        assert_eq!(view.balance_text, "---");
        assert_eq!(view.banner.text, "Error al conectar con el servidor.");
        assert_eq!(view.banner.kind, BannerKind::Error);

        ctl.dispatch(FlowEvent::AmountSelected(5.0));
        ctl.dispatch(FlowEvent::ActionPressed);
        run_until(&mut ctl, |s| !matches!(s, FlowState::Paying { .. })).await;

        let view = ctl.view();
        assert_eq!(view.button, ActionButton::enabled("REINTENTAR PAGO"));
        assert_eq!(view.banner.text, "Error al procesar el pago. Intenta de nuevo.");
    }

    #[tokio::test]
    async fn test_signed_link_in_strict_mode() {
        let mut config = GatewayConfig::default();
        config.security.require_signature = true;
        let server = TestServer::spawn(config).await;

        let sig = TicketSigner::default().sign(&TicketId::from("USER-99-TEST"));
        let mut ctl = controller(&server.api_base(), english());
        ctl.dispatch(FlowEvent::Started {
            url: Some(format!("http://localhost:5173/?id=USER-99-TEST&sig={}", sig)),
        });
        run_until(&mut ctl, awaiting_amount).await;
        assert_eq!(ctl.view().balance_text, "$100.00");

        ctl.dispatch(FlowEvent::AmountSelected(20.0));
        ctl.dispatch(FlowEvent::ActionPressed);
        run_until(&mut ctl, confirmed).await;
        assert_eq!(ctl.state(), &FlowState::Confirmed { new_balance: 120.0 });
    }

    #[tokio::test]
    async fn test_unsigned_link_in_strict_mode() {
        let mut config = GatewayConfig::default();
        config.security.require_signature = true;
        let server = TestServer::spawn(config).await;

        let mut ctl = controller(&server.api_base(), english());
        ctl.dispatch(FlowEvent::Started {
            url: Some("http://localhost:5173/?id=USER-99-TEST".into()),
        });
        run_until(&mut ctl, awaiting_amount).await;

        let view = ctl.view();
        assert_eq!(view.balance_text, "---");
        assert_eq!(view.banner.text, "Invalid ticket signature");
    }
}
