use super::{analyze_csv, StructuredGenerator};
use actix_web::{web, HttpResponse, Responder};
use common::requests::{AnalyzeFailure, AnalyzeRequest};
use common::session::ANALYSIS_FAILED_MESSAGE;
use log::{error, info};
use uuid::Uuid;

/// The Actix web handler for `POST /api/analysis`.
///
/// - On success: `200 OK` with the `AnalysisResult` as JSON.
/// - On any analysis failure: `502 Bad Gateway` with a fixed message. The
///   underlying cause goes to the server log under the request id.
pub(crate) async fn process(
    generator: web::Data<dyn StructuredGenerator>,
    payload: web::Json<AnalyzeRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let request_id = Uuid::new_v4();
    info!(
        "analysis {} started: file='{}' chars={}",
        request_id,
        request.file_name,
        request.csv.chars().count()
    );

    match analyze_csv(generator.get_ref(), &request.csv).await {
        Ok(result) => {
            info!(
                "analysis {} finished: anomalies={} root_causes={} chart={}",
                request_id,
                result.anomalies.len(),
                result.root_causes.len(),
                result.chart_suggestion.is_some()
            );
            HttpResponse::Ok().json(result)
        }
        Err(err) => {
            error!("analysis {} failed: {}", request_id, err);
            HttpResponse::BadGateway().json(AnalyzeFailure {
                message: ANALYSIS_FAILED_MESSAGE.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::configure_routes;
    use super::super::tests::{ScriptedGenerator, MINIMAL};
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use common::model::analysis::AnalysisResult;
    use std::sync::Arc;

    fn data(generator: ScriptedGenerator) -> web::Data<dyn StructuredGenerator> {
        let generator: Arc<dyn StructuredGenerator> = Arc::new(generator);
        web::Data::from(generator)
    }

    #[actix_web::test]
    async fn test_success_returns_result() {
        let app = test::init_service(
            App::new()
                .app_data(data(ScriptedGenerator::answering(MINIMAL)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/analysis")
            .set_json(AnalyzeRequest {
                file_name: "data.csv".to_string(),
                csv: "col1,col2\nval1,val2".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let result: AnalysisResult = test::read_body_json(resp).await;
        assert_eq!(result.summary, "ok");
        assert!(result.chart_suggestion.is_none());
    }

    #[actix_web::test]
    async fn test_large_upload_is_truncated_not_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().limit(crate::JSON_BODY_LIMIT))
                .app_data(data(ScriptedGenerator::answering(MINIMAL)))
                .service(configure_routes()),
        )
        .await;

        // 8 MB of quoted cells; escaped as JSON it would exceed the body limit
        let csv = "\"a\",\"b\"\n".repeat(1024 * 1024);
        let req = test::TestRequest::post()
            .uri("/api/analysis")
            .set_json(AnalyzeRequest::new("big.csv", &csv))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_failure_hides_detail() {
        let app = test::init_service(
            App::new()
                .app_data(data(ScriptedGenerator::failing(
                    "upstream exploded: key=abc123",
                )))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/analysis")
            .set_json(AnalyzeRequest {
                file_name: "data.csv".to_string(),
                csv: "a,b".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains(ANALYSIS_FAILED_MESSAGE));
        assert!(!text.contains("exploded"));
        assert!(!text.contains("abc123"));
    }

    #[actix_web::test]
    async fn test_schema_mismatch_is_bad_gateway() {
        let app = test::init_service(
            App::new()
                .app_data(data(ScriptedGenerator::answering(r#"{"summary": 1}"#)))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/analysis")
            .set_json(AnalyzeRequest {
                file_name: String::new(),
                csv: "a,b".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let failure: AnalyzeFailure = test::read_body_json(resp).await;
        assert_eq!(failure.message, ANALYSIS_FAILED_MESSAGE);
    }
}
