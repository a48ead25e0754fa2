use actix_multipart::Multipart;
use actix_web::{App, HttpResponse, HttpServer, web};
use futures_util::{StreamExt, TryStreamExt};
use image::{ImageFormat, Rgb, RgbImage};
use leafmd_cli::{ReqwestClassifier, Upload, export_report, run_analysis};
use serde_json::json;
use shared::{
    ANALYSIS_FAILED_MESSAGE, ClassifierConfig, ExportError, PropertyCatalog, ResultStage,
    SessionStatus, result_view,
};
use std::io::Cursor;

/// Answers like the leaf model: one `file` part in, `{ class, confidence }` out.
async fn predict(mut payload: Multipart) -> HttpResponse {
    let mut fields = Vec::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let name = field.name().unwrap_or_default().to_string();
        let mut size = 0;
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(data) => size += data.len(),
                Err(_) => return HttpResponse::BadRequest().finish(),
            }
        }
        fields.push((name, size));
    }

    match fields.as_slice() {
        [(name, size)] if name == "file" && *size > 0 => {
            HttpResponse::Ok().json(json!({ "class": "Neem", "confidence": 0.65 }))
        }
        _ => HttpResponse::BadRequest().body("expected a single file field"),
    }
}

async fn predict_low() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "class": "Neem", "confidence": 0.31 }))
}

async fn predict_crash() -> HttpResponse {
    HttpResponse::InternalServerError().body("model crashed")
}

async fn predict_garbage() -> HttpResponse {
    HttpResponse::Ok().body("<html>not json</html>")
}

fn spawn_endpoint() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/predict", web::post().to(predict))
            .route("/low", web::post().to(predict_low))
            .route("/crash", web::post().to(predict_crash))
            .route("/garbage", web::post().to(predict_garbage))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test endpoint");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

fn leaf_png() -> Upload {
    let img = RgbImage::from_pixel(8, 8, Rgb([40, 140, 60]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    Upload::new("neem.png", "image/png", bytes)
}

fn classifier(base: &str, path: &str) -> ReqwestClassifier {
    ReqwestClassifier::new(ClassifierConfig::new(format!("{}{}", base, path)))
}

#[actix_web::test]
async fn resolves_through_multipart_endpoint() {
    let base = spawn_endpoint();
    let catalog = PropertyCatalog::bundled().unwrap();

    let session = run_analysis(&classifier(&base, "/predict"), &catalog, leaf_png()).await;

    assert!(!session.is_analyzing());
    let view = result_view(&session, &catalog);
    assert_eq!(view.stage(), ResultStage::ResolvedHigh);
    assert!(view.shows_advisory());
    assert_eq!(session.resolution().unwrap().result.class_label, "Neem");
}

#[actix_web::test]
async fn wrong_field_name_fails_generically() {
    let base = spawn_endpoint();
    let catalog = PropertyCatalog::bundled().unwrap();
    let classifier = ReqwestClassifier::new(
        ClassifierConfig::new(format!("{}/predict", base)).with_field_name("image"),
    );

    let session = run_analysis(&classifier, &catalog, leaf_png()).await;

    match session.status() {
        SessionStatus::Failed(failure) => assert_eq!(failure.message, ANALYSIS_FAILED_MESSAGE),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[actix_web::test]
async fn server_error_and_malformed_body_fail() {
    let base = spawn_endpoint();
    let catalog = PropertyCatalog::bundled().unwrap();

    for path in ["/crash", "/garbage"] {
        let session = run_analysis(&classifier(&base, path), &catalog, leaf_png()).await;
        assert!(!session.is_analyzing());
        assert!(matches!(session.status(), SessionStatus::Failed(_)), "{}", path);
    }
}

#[actix_web::test]
async fn unreachable_endpoint_fails() {
    let catalog = PropertyCatalog::bundled().unwrap();
    let classifier = ReqwestClassifier::new(ClassifierConfig::new("http://127.0.0.1:1/predict"));

    let session = run_analysis(&classifier, &catalog, leaf_png()).await;

    assert!(!session.is_analyzing());
    assert_eq!(result_view(&session, &catalog).stage(), ResultStage::Failed);
}

#[actix_web::test]
async fn exports_report_for_full_result() {
    let base = spawn_endpoint();
    let catalog = PropertyCatalog::bundled().unwrap();
    let session = run_analysis(&classifier(&base, "/predict"), &catalog, leaf_png()).await;

    let bytes = export_report(&session, &catalog).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(shared::REPORT_FILENAME);
    std::fs::write(&path, &bytes).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-"));
    let title = b"Leaf Classification Report";
    assert!(written.windows(title.len()).any(|w| w == title));
}

#[actix_web::test]
async fn low_confidence_result_is_not_exportable() {
    let base = spawn_endpoint();
    let catalog = PropertyCatalog::bundled().unwrap();
    let session = run_analysis(&classifier(&base, "/low"), &catalog, leaf_png()).await;

    assert_eq!(result_view(&session, &catalog).stage(), ResultStage::ResolvedLow);
    assert!(matches!(
        export_report(&session, &catalog),
        Err(ExportError::NotExportable)
    ));
}

#[actix_web::test]
async fn undecodable_upload_surfaces_export_error() {
    let base = spawn_endpoint();
    let catalog = PropertyCatalog::bundled().unwrap();
    let upload = Upload::new("leaf.jpg", "image/jpeg", b"definitely not a jpeg".to_vec());
    let session = run_analysis(&classifier(&base, "/predict"), &catalog, upload).await;

    assert_eq!(result_view(&session, &catalog).stage(), ResultStage::ResolvedHigh);
    assert!(matches!(
        export_report(&session, &catalog),
        Err(ExportError::ImageDecode(_))
    ));
}
