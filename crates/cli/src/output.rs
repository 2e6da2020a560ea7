use crate::error::CliError;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn write_json<T: Serialize>(value: &T, pretty: bool, path: &str) -> Result<(), CliError> {
    let json = to_json(value, pretty)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let json = to_json(value, pretty)?;
    println!("{json}");
    Ok(())
}
