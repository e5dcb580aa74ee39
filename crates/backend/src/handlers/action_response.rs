use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::u501_process_action_response::request::ActionParams;
use contracts::usecases::u501_process_action_response::response::ProcessActionResult;
use serde::Deserialize;

use crate::usecases::u501_process_action_response::ResponseHandler;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub params: ActionParams,
    /// Уже десериализованный payload ответа канала
    #[serde(rename = "responseData")]
    pub response_data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct FailDetectedRequest {
    pub params: ActionParams,
    /// Текст транспортного сбоя (таймаут, обрыв соединения)
    pub message: String,
}

/// Обработать ответ канала на действие над товаром листинга.
///
/// Бизнес-ошибки канала не являются ошибками HTTP: они уходят в журнал,
/// а клиент получает is_success=false. 422 — только нарушение протокола
/// или конфигурации.
pub async fn process(
    Json(request): Json<ProcessRequest>,
) -> Result<Json<ProcessActionResult>, (StatusCode, String)> {
    let mut handler = ResponseHandler::new(request.params)
        .await
        .map_err(unprocessable)?;

    handler
        .process(&request.response_data)
        .await
        .map_err(unprocessable)?;

    handler.event_after_executing().await.map_err(internal)?;

    Ok(Json(ProcessActionResult {
        is_success: handler.is_success(),
    }))
}

/// Зафиксировать транспортный сбой действия: структурированного ответа нет
pub async fn fail_detected(
    Json(request): Json<FailDetectedRequest>,
) -> Result<Json<ProcessActionResult>, (StatusCode, String)> {
    let handler = ResponseHandler::new(request.params)
        .await
        .map_err(unprocessable)?;

    handler
        .fail_detected(&request.message)
        .await
        .map_err(internal)?;

    handler.event_after_executing().await.map_err(internal)?;

    Ok(Json(ProcessActionResult {
        is_success: handler.is_success(),
    }))
}

fn unprocessable(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::UNPROCESSABLE_ENTITY, format!("{:#}", e))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    tracing::error!("Action response processing failed: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
}
