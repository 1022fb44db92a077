use crate::builder::FragmentBuilder;
use crate::cli::GenerateArgs;
use crate::condition::Condition;
use crate::config::Config;
use crate::error::{Result, SqlMakerError};
use crate::request::{GenerateRequest, JoinSpec};
use crate::validate::RequestValidator;
use std::fs;
use tracing::{debug, info};

/// Handle the generate command: print the statement or write it to `--output`
#[allow(clippy::disallowed_methods)]
pub fn handle_generate(args: &GenerateArgs, config: &Config) -> Result<()> {
    let sql = generate_sql(args, config)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{sql}\n"))?;
            info!("Wrote statement to {}", path.display());
        }
        None => println!("{sql}"),
    }

    Ok(())
}

/// Collect, validate and render the statement described by `args`
pub fn generate_sql(args: &GenerateArgs, config: &Config) -> Result<String> {
    let request = collect_request(args)?;
    debug!(
        "Generating '{}' statement for table '{}'",
        request.operation,
        request.table_name()
    );

    RequestValidator::new(config).validate(&request)?;

    FragmentBuilder::new(config)
        .try_build(&request)
        .map_err(|reason| SqlMakerError::NotGenerated {
            message: reason.message(&config.messages()).to_string(),
            reason,
        })
}

/// Assemble a request from a request file or from the individual flags
pub fn collect_request(args: &GenerateArgs) -> Result<GenerateRequest> {
    if let Some(path) = &args.request {
        info!("Loading request from {}", path.display());
        return Ok(GenerateRequest::from_file(path)?);
    }

    let mut request = GenerateRequest::new(
        args.operation.as_deref().unwrap_or_default(),
        args.table.clone().unwrap_or_default(),
    )
    .column_text(&args.columns);

    request = match &args.where_text {
        Some(text) => request.where_text(text.as_str()),
        None => request.conditions(
            args.conditions
                .iter()
                .map(|text| Condition::parse(text))
                .collect::<std::result::Result<Vec<_>, _>>()?,
        ),
    };

    if let (Some(table), Some(on)) = (&args.join_table, &args.join_on) {
        request = request.join(JoinSpec::new(table.as_str(), on.as_str()));
    }
    if let Some(id) = &args.id {
        request = request.id(id.as_str());
    }
    if let Some(parameter_type) = &args.parameter_type {
        request = request.parameter_type(parameter_type.as_str());
    }
    if let Some(result_type) = &args.result_type {
        request = request.result_type(result_type.as_str());
    }
    if let Some(values) = &args.values {
        request = request.values(values.as_str());
    }
    if let Some(set) = &args.set {
        request = request.set(set.as_str());
    }

    Ok(request)
}
