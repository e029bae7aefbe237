use city_core::{InMemoryKeyValueStore, ProcessController, StepDataRelay, StepNumber};
use city_persistence::FileKeyValueStore;
use cityflow_rust::{CoreError, EvaluationSession, JsonDirectoryProvider, CONFIG};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Uso: cityflow <comando>
  status
  download <city_id>
  refine <min_length_m>
  select <segment_id>
  goto <n> | complete <n> | next | back
  reset
  walk <city_id> [min_length_m] [segment_id]";

type Session = EvaluationSession<FileKeyValueStore, InMemoryKeyValueStore>;

fn main() {
    // Cargar .env si existe para obtener CITYFLOW_STATE_DIR / CITYFLOW_DATA_DIR
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                                     .with_writer(std::io::stderr)
                                     .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    let cfg = &*CONFIG;
    let store = match FileKeyValueStore::from_config(&cfg.store) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[cityflow] store error: {e}");
            std::process::exit(5);
        }
    };
    // El relay es de sesión: vive lo que dura esta invocación.
    let mut session: Session = EvaluationSession::new(ProcessController::with_key(store, &cfg.store.process_key),
                                                      StepDataRelay::new(InMemoryKeyValueStore::new()));
    let provider = JsonDirectoryProvider::new(&cfg.data_dir);

    let result = match (command.as_str(), &args[1..]) {
        ("status", []) => Ok(()),
        ("download", [city]) => session.acquire(&provider, city).map(|d| println!("descargado: {} ({} segmentos)", d.name, d.segments.len())),
        ("refine", [min]) => match min.parse::<f64>() {
            Ok(min) => session.refine(min).map(|removed| println!("refinado: {removed} segmentos descartados")),
            Err(_) => usage_error(&format!("longitud inválida '{min}'")),
        },
        ("select", [segment]) => session.select_segment(segment).map(|id| println!("segmento seleccionado: {id}")),
        ("goto", [n]) => parse_step(n).and_then(|s| session.navigate(s)),
        ("complete", [n]) => parse_step(n).and_then(|s| session.complete(s)),
        ("next", []) => session.advance().map(|s| if s.is_none() { println!("ya estás en la última etapa") }),
        ("back", []) => session.retreat().map(|s| if s.is_none() { println!("ya estás en la primera etapa") }),
        ("reset", []) => session.reset().map(|_| println!("proceso reiniciado")),
        ("walk", [city, rest @ ..]) if rest.len() <= 2 => walk(&mut session, &provider, city, rest),
        _ => usage_error("comando o argumentos no reconocidos"),
    };

    match result {
        Ok(()) => {
            print_status(&session);
            std::process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("[cityflow {command}] {e}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Recorre todas las etapas en una misma sesión (el relay sí se usa aquí).
fn walk(session: &mut Session, provider: &JsonDirectoryProvider, city: &str, rest: &[String]) -> Result<(), CoreError> {
    let min = match rest.first() {
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) => v,
            Err(_) => return usage_error(&format!("longitud inválida '{raw}'")),
        },
        None => 0.0,
    };
    session.acquire(provider, city)?;
    let removed = session.refine(min)?;
    println!("refinado: {removed} segmentos descartados");
    let segment = match rest.get(1) {
        Some(id) => id.clone(),
        None => {
            let data = session.working_city_data().ok_or(CoreError::MissingCityData)?;
            // sin segmento explícito: el más largo
            let longest = data.segments.iter().max_by(|a, b| a.length_m.total_cmp(&b.length_m));
            match longest {
                Some(s) => s.id.to_string(),
                None => return Err(CoreError::MissingCityData),
            }
        }
    };
    let id = session.select_segment(&segment)?;
    tracing::info!(segment = %id, "walk finished");
    Ok(())
}

fn parse_step(raw: &str) -> Result<StepNumber, CoreError> { raw.parse::<StepNumber>().map_err(CoreError::from) }

fn usage_error<T>(msg: &str) -> Result<T, CoreError> {
    eprintln!("{msg}\n{USAGE}");
    std::process::exit(2);
}

fn exit_code(err: &CoreError) -> i32 {
    match err {
        CoreError::Persistence(_) | CoreError::Process(city_core::ProcessError::StorageUnavailable(_)) => 5,
        CoreError::Domain(city_domain::DomainError::ExternalError(_)) => 5,
        _ => 4,
    }
}

fn print_status(session: &Session) {
    let ctl = session.controller();
    println!("paso actual: {}", ctl.current_step());
    for (stage, status) in session.stage_statuses() {
        println!("  [{:?}] {} {} ({})", status, stage.number, stage.name, stage.id);
    }
    match ctl.city_data() {
        Some(d) => println!("ciudad: {} [{}] segmentos={} refinado={}", d.name, d.city_id, d.segments.len(), d.refined),
        None => println!("ciudad: (sin datos)"),
    }
    if let Some(id) = ctl.selected_segment_id() {
        println!("segmento: {id}");
    }
}
