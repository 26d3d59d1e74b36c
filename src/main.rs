/*
Description : Nagios plugin that evaluates one health metric of an Elasticsearch cluster
              (cluster health, node counts, CPU, heap or disk usage) and reports the verdict
              with performance data on stdout, using the plugin exit code convention.

Usage       : elastic_nagios_check --es_url http://10.0.0.1:9200 --check cpu_usage --w 75 --c 90
              Every flag can also be given through the environment (ES_URL, CHECK, NODE_IP,
              NODE_NAME, W, C, TIMEOUT_SEC) or a `.env` file.
*/
mod common;
use common::*;

mod controller;
use controller::main_controller::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::check_service_impl::*;

mod model;
use model::{
    check_request::*,
    configs::{check_args::*, config::*, system_config::*},
    evaluation_result::*,
};

mod repository;
use repository::es_repository::*;

mod env_configuration;

mod traits;

mod enums;
use enums::severity::*;

use clap::error::ErrorKind;

#[doc = "Prints the plugin line and terminates with the matching exit code."]
fn emit(result: &EvaluationResult, logger: Option<LoggerHandle>) -> ! {
    println!("{}", result.plugin_output());

    if let Some(handle) = logger {
        handle.flush();
    }

    std::process::exit(result.severity().exit_code())
}

#[doc = "Builds the dependency chain for one cluster and runs the check."]
async fn run_check(args: &CheckArgs, system_config: &SystemConfig) -> EvaluationResult {
    let request: CheckRequest = match CheckRequest::from_args(args) {
        Ok(request) => request,
        Err(e) => {
            error!("[main()] invalid settings: {}", e);
            return EvaluationResult::plain(Severity::Unknown, &e.to_string());
        }
    };

    let timeout_sec: u64 = args
        .timeout_sec
        .unwrap_or(system_config.connection.timeout_sec);

    let es_repository: EsRepositoryImpl =
        match EsRepositoryImpl::new(request.es_url(), timeout_sec) {
            Ok(repo) => repo,
            Err(e) => {
                error!("[main()] Unable to create the Elasticsearch client: {:?}", e);
                return EvaluationResult::from_error(&e);
            }
        };

    let check_service: Arc<CheckServiceImpl<EsRepositoryImpl>> =
        Arc::new(CheckServiceImpl::new(Arc::new(es_repository)));

    let controller: MainController<CheckServiceImpl<EsRepositoryImpl>> =
        MainController::new(check_service);

    controller.main_task(&request).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* .env values act as defaults for the flags */
    dotenv().ok();

    let args: CheckArgs = match CheckArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let reason: String = e.to_string();
            let first_line: &str = reason.lines().next().unwrap_or("invalid arguments");
            emit(
                &EvaluationResult::plain(Severity::Unknown, first_line.trim_start_matches("error: ")),
                None,
            )
        }
    };

    let system_config: SystemConfig = match initialize_system_config() {
        Ok(config) => config,
        Err(e) => emit(&EvaluationResult::from_error(&e), None),
    };

    /* a broken log setup must not change the verdict */
    let logger: Option<LoggerHandle> = match set_global_logger(&system_config.log) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("[main()] logger disabled: {:?}", e);
            None
        }
    };

    info!("Start Elasticsearch check '{}'", args.check);

    let result: EvaluationResult = run_check(&args, &system_config).await;

    emit(&result, logger)
}
