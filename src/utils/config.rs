/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to `default` when it is
/// missing, empty or does not parse as `T`
///
/// Surrounding whitespace is trimmed before parsing.
/// A value that is present but unparsable is reported with `error!` so a
/// misconfigured deployment does not silently run on defaults.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        _ => default,
    }
}

/// Reads and parses an environment variable
///
/// # Returns
/// `None` when the variable is missing, empty or not a valid `T`
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .and_then(|val| val.trim().parse::<T>().ok())
}
