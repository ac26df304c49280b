//! Command registry
//!
//! Immutable name → [`CommandSpec`] map, built once on first use and keyed
//! by lowercase name.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::command::CommandSpec;
use crate::error::{KvError, Result};

use super::command::ReplyKind::{Bulk, Integer, MultiBulk, SingleLine, Status};
use super::command::RequestMode::{PlainInline as Plain, TrailingBulk as Trailing};

/// Every command the client knows about
pub const COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec::new("get", 2, Plain, Bulk),
    CommandSpec::new("set", 3, Trailing, Status),
    CommandSpec::new("setnx", 3, Trailing, Integer),
    CommandSpec::new("del", 2, Plain, Integer),
    CommandSpec::new("exists", 2, Plain, Integer),
    CommandSpec::new("incr", 2, Plain, Integer),
    CommandSpec::new("decr", 2, Plain, Integer),
    CommandSpec::new("rpush", 3, Trailing, Status),
    CommandSpec::new("lpush", 3, Trailing, Status),
    CommandSpec::new("rpop", 2, Plain, Bulk),
    CommandSpec::new("lpop", 2, Plain, Bulk),
    CommandSpec::new("llen", 2, Plain, Integer),
    CommandSpec::new("lindex", 3, Plain, Bulk),
    CommandSpec::new("lset", 4, Trailing, Status),
    CommandSpec::new("lrange", 4, Plain, MultiBulk),
    CommandSpec::new("ltrim", 4, Plain, Status),
    CommandSpec::new("lrem", 4, Trailing, Integer),
    CommandSpec::new("sadd", 3, Trailing, Integer),
    CommandSpec::new("srem", 3, Trailing, Integer),
    CommandSpec::new("sismember", 3, Trailing, Integer),
    CommandSpec::new("scard", 2, Plain, Integer),
    CommandSpec::new("sinter", -2, Plain, MultiBulk),
    CommandSpec::new("sinterstore", -3, Plain, Status),
    CommandSpec::new("smembers", 2, Plain, MultiBulk),
    CommandSpec::new("incrby", 3, Plain, Integer),
    CommandSpec::new("decrby", 3, Plain, Integer),
    CommandSpec::new("randomkey", 1, Plain, SingleLine),
    CommandSpec::new("select", 2, Plain, Status),
    CommandSpec::new("move", 3, Plain, Integer),
    CommandSpec::new("rename", 3, Plain, Status),
    CommandSpec::new("renamenx", 3, Plain, Integer),
    CommandSpec::new("keys", 2, Plain, Bulk),
    CommandSpec::new("dbsize", 1, Plain, Integer),
    CommandSpec::new("ping", 1, Plain, Status),
    CommandSpec::new("echo", 2, Trailing, Bulk),
    CommandSpec::new("save", 1, Plain, Status),
    CommandSpec::new("bgsave", 1, Plain, Status),
    CommandSpec::new("shutdown", 1, Plain, Status),
    CommandSpec::new("lastsave", 1, Plain, Integer),
    CommandSpec::new("type", 2, Plain, SingleLine),
    CommandSpec::new("flushdb", 1, Plain, Status),
    CommandSpec::new("flushall", 1, Plain, Status),
    CommandSpec::new("sort", -2, Plain, MultiBulk),
    CommandSpec::new("version", 1, Plain, SingleLine),
];

/// Case-insensitive lookup table over [`COMMAND_TABLE`]
#[derive(Debug)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandSpec>,
}

impl CommandRegistry {
    /// Build a registry from a table of specs
    pub fn from_table(table: &[CommandSpec]) -> Self {
        let commands = table.iter().map(|spec| (spec.name, *spec)).collect();
        Self { commands }
    }

    /// Process-wide registry over the built-in command table
    pub fn global() -> &'static CommandRegistry {
        static REGISTRY: OnceLock<CommandRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| CommandRegistry::from_table(COMMAND_TABLE))
    }

    /// Find a command by name, ignoring ASCII case
    pub fn lookup(&self, name: &str) -> Result<&CommandSpec> {
        self.commands
            .get(name.to_ascii_lowercase().as_str())
            .ok_or_else(|| KvError::UnknownCommand(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All registered specs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::from_table(COMMAND_TABLE)
    }
}

/// Look a command up in the global registry
pub fn lookup(name: &str) -> Result<&'static CommandSpec> {
    CommandRegistry::global().lookup(name)
}
