use crate::models::{BfhlResponse, Operation, OperationData};
use crate::services::{math, AnswerService};
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use service_core::error::AppError;

/// `POST /bfhl`: run the single operation named in the body.
pub async fn bfhl(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BfhlResponse>, AppError> {
    let Json(body) = payload?;

    let operation = Operation::from_body(body).inspect_err(|e| {
        tracing::info!(error = %e, "Rejected /bfhl request");
    })?;
    let key = operation.key();

    let data = execute(&state.answers, operation).await.inspect_err(|e| {
        tracing::info!(operation = key, error = %e, "Operation failed validation");
    })?;

    tracing::info!(operation = key, "Operation completed");

    Ok(Json(BfhlResponse::success(
        &state.config.official_email,
        key,
        data,
    )))
}

/// Trial division runs on the blocking pool since one large input can take
/// seconds; the other numeric operations run inline.
pub async fn execute(
    answers: &AnswerService,
    operation: Operation,
) -> Result<OperationData, AppError> {
    let data = match operation {
        Operation::Fibonacci(n) => OperationData::Sequence(math::fibonacci(n)?),
        Operation::Prime(numbers) => {
            let primes = tokio::task::spawn_blocking(move || math::primes(&numbers))
                .await
                .map_err(|e| AppError::InternalError(e.into()))??;
            OperationData::Numbers(primes)
        }
        Operation::Lcm(numbers) => OperationData::Number(math::lcm(&numbers)?),
        Operation::Hcf(numbers) => OperationData::Number(math::hcf(&numbers)?),
        Operation::Ai(question) => OperationData::Answer(answers.answer(&question).await),
    };
    Ok(data)
}
