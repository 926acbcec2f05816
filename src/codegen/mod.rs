pub mod backend;
pub mod errors;
#[cfg(feature = "llvm_backend")]
pub mod llvm;
pub mod lowering;
pub mod opcodes;
pub mod recording;
pub mod types;

pub use backend::*;
pub use errors::*;
#[cfg(feature = "llvm_backend")]
pub use llvm::*;
pub use lowering::*;
pub use opcodes::*;
pub use recording::*;
pub use types::*;
