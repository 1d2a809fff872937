//! # Balance API over HTTP
//!
//! `HttpBalanceClient` against a live gateway: the wire contract, status
//! mapping and ledger properties seen from outside the process.

#[cfg(test)]
mod tests {
    use super::super::support::TestServer;
    use mr_02_api_gateway::GatewayConfig;
    use mr_03_flow_controller::{BalanceClient, ClientError, HttpBalanceClient};
    use serde_json::{json, Value};
    use shared_types::{RechargeRequest, TicketId, TicketSigner};

    fn client_for(server: &TestServer) -> HttpBalanceClient {
        HttpBalanceClient::new(&server.api_base()).unwrap()
    }

    #[tokio::test]
    async fn test_recharge_then_read_back() {
        let server = TestServer::empty().await;
        let client = client_for(&server);
        let id = TicketId::from("METRO-X");

        let response = client.recharge(&RechargeRequest::new(id.clone(), 50.0)).await.unwrap();
        assert!(response.success);
        assert_eq!(response.new_balance, 50.0);

        let balance = client.get_balance(&id, None).await.unwrap();
        assert_eq!(balance.id, id);
        assert_eq!(balance.balance, 50.0);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_recharge_creates_unseen_ticket() {
        let server = TestServer::empty().await;
        let client = client_for(&server);

        let response = client
            .recharge(&RechargeRequest::new(TicketId::from("NEW-ID"), 20.0))
            .await
            .unwrap();
        assert_eq!(response.new_balance, 20.0);
        assert_eq!(server.api.ticket_count(), 1);
    }

    #[tokio::test]
    async fn test_non_positive_amounts_rejected() {
        let server = TestServer::seeded().await;
        let client = client_for(&server);
        let id = TicketId::from("USER-99-TEST");

        for amount in [0.0, -5.0] {
            let err = client
                .recharge(&RechargeRequest::new(id.clone(), amount))
                .await
                .unwrap_err();
            assert_eq!(
                err,
                ClientError::Rejected {
                    status: 400,
                    message: "invalid amount".into()
                }
            );
        }

        assert_eq!(client.get_balance(&id, None).await.unwrap().balance, 100.0);
    }

    #[tokio::test]
    async fn test_reads_never_create_entries() {
        let server = TestServer::seeded().await;
        let client = client_for(&server);

        for i in 0..5 {
            let id = TicketId::new(format!("GHOST-{}", i));
            assert_eq!(client.get_balance(&id, None).await.unwrap().balance, 0.0);
        }

        let health: Value = reqwest::get(format!("{}/health", server.base_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["tickets"], 2);
    }

    #[tokio::test]
    async fn test_signature_checked() {
        let server = TestServer::seeded().await;
        let client = client_for(&server);
        let id = TicketId::from("METRO-ABC-789");
        let sig = TicketSigner::default().sign(&id);

        let balance = client.get_balance(&id, Some(&sig)).await.unwrap();
        assert_eq!(balance.balance, 25.5);

        let err = client.get_balance(&id, Some("deadbeef")).await.unwrap_err();
        assert_eq!(err, ClientError::Unauthorized);

        // A signature for another ticket does not transfer
        let other = TicketSigner::default().sign(&TicketId::from("USER-99-TEST"));
        assert_eq!(
            client.get_balance(&id, Some(&other)).await.unwrap_err(),
            ClientError::Unauthorized
        );
    }

    #[tokio::test]
    async fn test_strict_mode_requires_signature_on_recharge() {
        let mut config = GatewayConfig::default();
        config.security.require_signature = true;
        let server = TestServer::spawn(config).await;
        let client = client_for(&server);
        let id = TicketId::from("METRO-ABC-789");

        let err = client
            .recharge(&RechargeRequest::new(id.clone(), 5.0))
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::Unauthorized);

        let mut signed = RechargeRequest::new(id.clone(), 5.0);
        signed.signature = Some(TicketSigner::default().sign(&id));
        assert_eq!(client.recharge(&signed).await.unwrap().new_balance, 30.5);
    }

    #[tokio::test]
    async fn test_concurrent_recharges_are_not_lost() {
        let server = TestServer::empty().await;
        let client = client_for(&server);
        let id = TicketId::from("METRO-BUSY");

        let mut handles = Vec::new();
        for _ in 0..20 {
            let client = client.clone();
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                client.recharge(&RechargeRequest::new(id, 5.0)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(client.get_balance(&id, None).await.unwrap().balance, 100.0);
    }

    #[tokio::test]
    async fn test_wire_format() {
        let server = TestServer::empty().await;
        let http = reqwest::Client::new();

        let body: Value = http
            .post(format!("{}/recharge", server.api_base()))
            .json(&json!({ "id": "METRO-X", "amount": 50 }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "newBalance": 50.0,
                "message": "Recharge processed instantly"
            })
        );

        let response = http
            .post(format!("{}/recharge", server.api_base()))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let server = TestServer::empty().await;
        let response = reqwest::Client::new()
            .request(
                reqwest::Method::OPTIONS,
                format!("{}/recharge", server.api_base()),
            )
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }
}
