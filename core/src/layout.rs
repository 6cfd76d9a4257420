//! # Project Layout
//!
//! The fixed skeleton of a generated Gin service. Both tables are plain
//! statics; nothing here depends on user input except the `{{module}}`
//! placeholder, which [`crate::template::render`] fills in.

/// A file to emit, relative to the project root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: &'static str,
    pub body: &'static str,
}

/// A directory set paired with a file set.
///
/// The generator only ever sees a `Layout`, never the statics directly.
#[derive(Clone, Copy, Debug)]
pub struct Layout<'a> {
    pub directories: &'a [&'a str],
    pub files: &'a [FileTemplate],
}

impl Layout<'static> {
    pub const fn standard() -> Self {
        Self {
            directories: DIRECTORIES,
            files: FILES,
        }
    }
}

pub const DIRECTORIES: &[&str] = &[
    "cmd",
    "config",
    "internal/app",
    "internal/database",
    "internal/models",
    "internal/handlers",
    "internal/middleware",
    "internal/repository",
    "internal/services",
    "pkg/utils",
    "tests",
];

pub const FILES: &[FileTemplate] = &[
    FileTemplate {
        path: "cmd/main.go",
        body: MAIN_GO,
    },
    FileTemplate {
        path: "config/config.go",
        body: CONFIG_GO,
    },
    FileTemplate {
        path: "config/config.yaml",
        body: CONFIG_YAML,
    },
    FileTemplate {
        path: "internal/app/app.go",
        body: APP_GO,
    },
    FileTemplate {
        path: "internal/app/routes.go",
        body: ROUTES_GO,
    },
    FileTemplate {
        path: "internal/handlers/ping.go",
        body: PING_GO,
    },
    FileTemplate {
        path: "go.mod",
        body: GO_MOD,
    },
];

pub const DEFAULT_PORT: &str = ":8000";
pub const DEFAULT_DATABASE: &str = "sqlite://app.db";

const MAIN_GO: &str = r#"package main

import (
    "{{module}}/config"
    "{{module}}/internal/app"
)

func main() {
    cfg := config.LoadConfig()
    app.Run(cfg)
}
"#;

// Read and unmarshal errors are ignored on purpose; the generated loader
// falls back to zero values.
const CONFIG_GO: &str = r#"package config

import "github.com/spf13/viper"

type Config struct {
    Port     string `mapstructure:"port"`
    Database string `mapstructure:"database"`
}

func LoadConfig() *Config {
    viper.SetConfigFile("config/config.yaml")
    viper.ReadInConfig()
    cfg := &Config{}
    viper.Unmarshal(cfg)
    return cfg
}
"#;

const CONFIG_YAML: &str = r#"port: ":8000"
database: "sqlite://app.db"
"#;

const APP_GO: &str = r#"package app

import (
    "github.com/gin-gonic/gin"
    "{{module}}/config"
)

func Run(cfg *config.Config) {
    r := gin.Default()
    RegisterRoutes(r)
    r.Run(cfg.Port)
}
"#;

const ROUTES_GO: &str = r#"package app

import (
    "github.com/gin-gonic/gin"
    "{{module}}/internal/handlers"
)

func RegisterRoutes(r *gin.Engine) {
    r.GET("/ping", handlers.Ping)
}
"#;

const PING_GO: &str = r#"package handlers

import "github.com/gin-gonic/gin"

func Ping(c *gin.Context) {
    c.JSON(200, gin.H{"message": "pong"})
}
"#;

const GO_MOD: &str = r#"module {{module}}

go 1.21

require (
    github.com/gin-gonic/gin v1.9.1
    github.com/spf13/viper v1.19.0
)
"#;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
