use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Parser};

use yearsort::classifier::{DEFAULT_FALLBACK_PATTERN, DEFAULT_LABEL_PATTERN};
use yearsort::config::{DEFAULT_DESTINATION_DIR, DEFAULT_MAX_PAGES};
use yearsort::{PlaceMode, SortConfig};

/// Command line surface of the `yearsort` binary.
#[derive(Parser, Debug)]
#[command(
    name = "yearsort",
    version,
    about = "Lê PDFs, detecta o 'Ano de exercício' e organiza os arquivos em pastas pelo ano."
)]
pub struct Cli {
    #[arg(
        long = "src",
        default_value = ".",
        help = "Diretório onde estão os PDFs (padrão: diretório atual)"
    )]
    pub source_dir: PathBuf,

    #[arg(
        long = "dst",
        default_value = DEFAULT_DESTINATION_DIR,
        help = "Diretório de saída onde serão criadas as pastas por ano"
    )]
    pub destination_dir: PathBuf,

    #[arg(long, help = "Busca PDFs recursivamente no diretório de origem")]
    pub recursive: bool,

    #[arg(long, help = "Copia os arquivos ao invés de mover")]
    pub copy: bool,

    #[arg(
        long,
        default_value_t = DEFAULT_MAX_PAGES as i64,
        allow_negative_numbers = true,
        help = "Número máximo de páginas lidas de cada PDF (mínimo 1)"
    )]
    pub max_pages: i64,

    #[arg(long, help = "Mostra o que seria feito sem mover/copiar os arquivos")]
    pub dry_run: bool,

    #[arg(
        long,
        default_value = DEFAULT_LABEL_PATTERN,
        help = "Regex que localiza o ano após o rótulo 'Ano de exercício'; precisa de um grupo de captura"
    )]
    pub label_pattern: String,

    #[arg(
        long = "fallback-year-pattern",
        default_value = DEFAULT_FALLBACK_PATTERN,
        help = "Regex de fallback para um ano de 4 dígitos quando o rótulo não é encontrado"
    )]
    pub fallback_pattern: String,

    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Aumenta o detalhamento dos logs (-v, -vv, -vvv)"
    )]
    pub verbose: u8,
}

impl Cli {
    pub fn into_config(self) -> SortConfig {
        SortConfig {
            source_dir: absolute(&self.source_dir),
            destination_dir: absolute(&self.destination_dir),
            recursive: self.recursive,
            mode: if self.copy {
                PlaceMode::Copy
            } else {
                PlaceMode::Move
            },
            // Negative counts collapse to zero; page_limit() raises that to one.
            max_pages: usize::try_from(self.max_pages).unwrap_or(0),
            dry_run: self.dry_run,
            label_pattern: self.label_pattern,
            fallback_pattern: self.fallback_pattern,
        }
    }
}

/// Anchors relative paths at the working directory; left as-is if that
/// cannot be determined.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
