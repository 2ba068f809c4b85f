pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::Caller,
    invitations::{
        accept_invitation_request::AcceptInvitationRequest,
        accept_response::AcceptResponse,
        create_invitation_request::CreateInvitationRequest,
        invitation_dto::InvitationDto,
        invitation_response::InvitationResponse,
        invitations::{accept_invitation, create_invitation},
    },
    members::{
        member_dto::MemberDto,
        member_list_response::MemberListResponse,
        member_profile_dto::MemberProfileDto,
        member_response::MemberResponse,
        members::{list_members, remove_member, update_member_role},
        membership_dto::MembershipDto,
        update_member_role_request::UpdateMemberRoleRequest,
    },
    projects::{
        create_project_request::CreateProjectRequest,
        overview_dto::OverviewDto,
        overview_response::OverviewResponse,
        project_detail_response::ProjectDetailResponse,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{
            create_project, delete_project, get_overview, get_project, list_projects,
            update_overview, update_project,
        },
        update_project_request::UpdateProjectRequest,
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        task_dto::TaskDto,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        tasks::{create_task, delete_task, list_tasks, update_task},
        update_task_request::UpdateTaskRequest,
    },
    users::{user_dto::UserDto, user_response::UserResponse, users::sync_user},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use huddle_auth::JwtValidator;
use huddle_cache::{CacheService, RedisStore};
use huddle_mail::{Mailer, NullMailer, SmtpMailer, SmtpSettings};
use huddle_service::{InviteSettings, ServiceContext};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up a local .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = huddle_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = huddle_config::Config::config_dir()?;
        let path = config_dir.join(filename);

        // Ensure log directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Some(path)
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting huddle-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool, running migrations on the way up
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = huddle_db::create_pool(&database_path).await?;
    info!("Database ready");

    // Cache layer. An unreachable Redis degrades to store-only reads
    // instead of failing startup.
    let cache = if config.cache.enabled {
        match RedisStore::connect(&config.cache.url).await {
            Ok(store) => {
                info!("Cache: redis connected");
                CacheService::with_store(
                    Arc::new(store),
                    Duration::from_secs(config.cache.default_ttl_secs),
                    Duration::from_secs(config.cache.long_ttl_secs),
                )
            }
            Err(e) => {
                warn!("Cache: redis unavailable, continuing without cache: {}", e);
                CacheService::disabled()
            }
        }
    } else {
        info!("Cache: disabled");
        CacheService::disabled()
    };

    // Mailer: SMTP when configured, otherwise log-and-drop
    let mailer: Arc<dyn Mailer> = match (&config.smtp.host, &config.smtp.from_address) {
        (Some(host), Some(from_address)) => {
            info!("Mail: SMTP delivery via {}:{}", host, config.smtp.port);
            Arc::new(SmtpMailer::new(&SmtpSettings {
                host: host.clone(),
                port: config.smtp.port,
                tls: config.smtp.tls,
                username: config.smtp.username.clone(),
                password: config.smtp.password.clone(),
                from_address: from_address.clone(),
                from_name: config.smtp.from_name.clone(),
            })?)
        }
        _ => {
            warn!("Mail: SMTP not configured, invitation emails are logged and dropped");
            Arc::new(NullMailer)
        }
    };

    // Create JWT validator (optional based on auth.enabled)
    let jwt_validator: Option<Arc<JwtValidator>> = if config.auth.enabled {
        let validator = if let Some(ref secret) = config.auth.jwt_secret {
            info!("JWT: HS256 authentication enabled");
            JwtValidator::with_hs256(secret.as_bytes())
        } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
            let config_dir = huddle_config::Config::config_dir()?;
            let full_path = config_dir.join(key_path);
            let public_key = std::fs::read_to_string(&full_path).map_err(|e| {
                error::ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                }
            })?;
            info!("JWT: RS256 authentication enabled");
            JwtValidator::with_rs256(&public_key)?
        } else {
            unreachable!("validate() ensures JWT config when auth.enabled")
        };

        let validator = match config.auth.issuer {
            Some(ref issuer) => validator.expect_issuer(issuer),
            None => validator,
        };
        let validator = match config.auth.audience {
            Some(ref audience) => validator.expect_audience(audience),
            None => validator,
        };

        Some(Arc::new(validator))
    } else {
        warn!("Authentication DISABLED - caller identity comes from request headers");
        None
    };

    // Build application state
    let services = ServiceContext::new(
        pool,
        cache,
        mailer,
        InviteSettings {
            public_base_url: config.invite.public_base_url.trim_end_matches('/').to_string(),
            duplicate_window_secs: config.invite.duplicate_window_secs,
        },
    );
    let app_state = AppState::new(services, jwt_validator);

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
