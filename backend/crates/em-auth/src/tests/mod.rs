mod claims;
mod token_source;
