use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use inkwell::context::Context as LLVMContext;
use std::path::{Path, PathBuf};
use rqc::codegen::{lower, Backend, LlvmBackend};
use rqc::parser::parse;
use rqc::source::read_source;

#[derive(ClapParser)]
#[command(name = "rqc")]
#[command(about = "Compile a bracket-delimited source file to a native object file", long_about = None)]
struct Cli {
    /// Input file path
    #[arg(value_name = "FILE", default_value = "main.rq")]
    file: PathBuf,

    /// Object file path
    #[arg(short, long, value_name = "OUTPUT", default_value = "main.obj")]
    output: PathBuf,

    /// Module name (defaults to the input file stem)
    #[arg(long, value_name = "NAME")]
    module_name: Option<String>,

    /// Stop after printing the IR
    #[arg(long)]
    no_object: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    compile_file(&cli)
}

fn compile_file(cli: &Cli) -> Result<()> {
    let path = &cli.file;
    let source = read_source(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    let tree = parse(&source)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    println!("source text: {tree}");

    let module_name = cli
        .module_name
        .clone()
        .unwrap_or_else(|| module_name_for(path));

    let context = LLVMContext::create();
    let mut backend = LlvmBackend::new(&context);
    let module = backend.create_module(&module_name);

    lower(&tree, &mut backend, &module)
        .with_context(|| format!("failed to generate code for '{}'", path.display()))?;
    println!("ir: {}", backend.render_textual_ir(&module));

    if cli.no_object {
        return Ok(());
    }

    backend
        .emit_object_file(&module, &cli.output)
        .with_context(|| format!("failed to write object file '{}'", cli.output.display()))?;
    log::info!("object file written to {}", cli.output.display());

    Ok(())
}

fn module_name_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("main")
        .to_string()
}
