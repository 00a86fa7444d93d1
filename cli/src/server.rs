#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{rejection::JsonRejection, Query, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use inverso::graph::Graph;
    use inverso::lotto::{generate_tickets, LottoDraw, Ticket, TicketResult};
    use inverso::{
        check_answer, check_formula, render, Event, Grade, Problem, QuizConfig, SessionState,
        UserAnswer,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;
    use tracing::{error, info};

    type SharedConfig = Arc<QuizConfig>;
    type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct StartRequest {
        seed: Option<u64>,
    }

    #[derive(Debug, Deserialize)]
    struct StepRequest {
        state: SessionState,
        event: Event,
        /// Only used by `new_problem`
        #[serde(default)]
        seed: Option<u64>,
    }

    #[derive(Debug, Serialize)]
    struct SessionResponse {
        state: SessionState,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        graph: Option<Graph>,
    }

    #[derive(Debug, Deserialize)]
    struct CheckRequest {
        problem: Problem,
        #[serde(default)]
        answer: Option<UserAnswer>,
        #[serde(default)]
        formula: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct LottoParams {
        tickets: Option<usize>,
        seed: Option<u64>,
    }

    #[derive(Debug, Serialize)]
    struct LottoResponse {
        draw: LottoDraw,
        tickets: Vec<TicketJson>,
    }

    #[derive(Debug, Serialize)]
    struct TicketJson {
        numbers: Ticket,
        result: TicketResult,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    pub fn router(config: QuizConfig) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/session/start", post(start_session))
            .route("/session/step", post(step_session))
            .route("/check", post(check))
            .route("/lotto", get(lotto))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::new(config))
    }

    pub async fn start_server(config: QuizConfig, host: &str, port: u16) -> anyhow::Result<()> {
        let app = router(config);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Inverso server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "inverso",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn start_session(
        State(config): State<SharedConfig>,
        payload: Result<Json<StartRequest>, JsonRejection>,
    ) -> ApiResult<SessionResponse> {
        let Json(request) = payload.map_err(rejection)?;
        let mut rng = make_rng(request.seed);

        let state = SessionState::start(&mut rng, &config).map_err(|e| {
            error!("Failed to start session: {}", e);
            bad_request(format!("Failed to start session: {}", e))
        })?;

        Ok(Json(session_response(state, &config)))
    }

    async fn step_session(
        State(config): State<SharedConfig>,
        payload: Result<Json<StepRequest>, JsonRejection>,
    ) -> ApiResult<SessionResponse> {
        let Json(request) = payload.map_err(rejection)?;
        let mut rng = make_rng(request.seed);

        let state = request
            .state
            .apply(&request.event, &mut rng, &config)
            .map_err(|e| {
                error!("Failed to apply event: {}", e);
                bad_request(format!("Failed to apply event: {}", e))
            })?;

        info!(problem = %state.problem, correct = state.grade.is_correct(), "session advanced");
        Ok(Json(session_response(state, &config)))
    }

    async fn check(
        State(config): State<SharedConfig>,
        payload: Result<Json<CheckRequest>, JsonRejection>,
    ) -> ApiResult<Grade> {
        let Json(request) = payload.map_err(rejection)?;

        let grade = match (request.answer, request.formula) {
            (Some(answer), None) => check_answer(&request.problem, &answer),
            (None, Some(formula)) => check_formula(&request.problem, &formula, &config),
            _ => {
                return Err(bad_request(
                    "Provide exactly one of 'answer' or 'formula'".to_string(),
                ))
            }
        };

        Ok(Json(grade))
    }

    async fn lotto(
        State(config): State<SharedConfig>,
        Query(params): Query<LottoParams>,
    ) -> ApiResult<LottoResponse> {
        let draw = LottoDraw::latest();
        let tickets = generate_tickets(
            &mut make_rng(params.seed),
            params.tickets.unwrap_or(1),
            &config,
        )
        .map_err(|e| bad_request(e.to_string()))?;

        let tickets = tickets
            .into_iter()
            .map(|numbers| TicketJson {
                result: draw.check(&numbers),
                numbers,
            })
            .collect();

        Ok(Json(LottoResponse { draw, tickets }))
    }

    fn session_response(state: SessionState, config: &QuizConfig) -> SessionResponse {
        SessionResponse {
            text: state.problem.to_string(),
            message: state.grade.grade().map(|g| g.verdict.to_string()),
            graph: render(&state, config),
            state,
        }
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn rejection(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
        bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }

    fn bad_request(error: String) -> (StatusCode, Json<ErrorResponse>) {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _config: inverso::QuizConfig,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
