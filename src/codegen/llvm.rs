use std::path::Path;

use inkwell::builder::Builder;
use inkwell::context::Context;
use inkwell::module::{Linkage, Module};
use inkwell::targets::{CodeModel, FileType, InitializationConfig, RelocMode, Target, TargetMachine};
use inkwell::types::IntType;
use inkwell::values::{FunctionValue, IntValue};
use inkwell::OptimizationLevel;

use crate::codegen::{parse_integer_literal, Backend, CodegenError, ValueType};

/// Backend producing LLVM IR and native object files through inkwell.
pub struct LlvmBackend<'ctx> {
    context: &'ctx Context,
    builder: Builder<'ctx>,
}

impl<'ctx> LlvmBackend<'ctx> {
    pub fn new(context: &'ctx Context) -> Self {
        Self {
            context,
            builder: context.create_builder(),
        }
    }

    fn int_type(&self, ty: ValueType) -> IntType<'ctx> {
        match ty {
            ValueType::I32 => self.context.i32_type(),
        }
    }

    fn target_machine(&self) -> Result<TargetMachine, CodegenError> {
        Target::initialize_native(&InitializationConfig::default())
            .map_err(CodegenError::Backend)?;

        let triple = TargetMachine::get_default_triple();
        let target = Target::from_triple(&triple)
            .map_err(|e| CodegenError::Backend(e.to_string()))?;

        target
            .create_target_machine(
                &triple,
                "generic",
                "",
                OptimizationLevel::Default,
                RelocMode::PIC,
                CodeModel::Default,
            )
            .ok_or_else(|| {
                CodegenError::Backend(format!(
                    "failed to create a target machine for '{}'",
                    triple.as_str().to_string_lossy()
                ))
            })
    }
}

impl<'ctx> Backend for LlvmBackend<'ctx> {
    type Module = Module<'ctx>;
    type Function = FunctionValue<'ctx>;
    type Value = IntValue<'ctx>;

    fn create_module(&mut self, name: &str) -> Module<'ctx> {
        self.context.create_module(name)
    }

    fn create_function(
        &mut self,
        module: &Module<'ctx>,
        name: &str,
        return_type: ValueType,
    ) -> Result<FunctionValue<'ctx>, CodegenError> {
        let fn_type = self.int_type(return_type).fn_type(&[], false);
        let function = module.add_function(name, fn_type, Some(Linkage::External));
        self.context.append_basic_block(function, name);
        Ok(function)
    }

    fn set_insertion_point(&mut self, function: FunctionValue<'ctx>) -> Result<(), CodegenError> {
        let block = function.get_first_basic_block().ok_or_else(|| {
            CodegenError::Backend(format!(
                "function '{}' has no basic block",
                function.get_name().to_string_lossy()
            ))
        })?;
        self.builder.position_at_end(block);
        Ok(())
    }

    fn emit_return(&mut self, value: Option<IntValue<'ctx>>) -> Result<(), CodegenError> {
        let result = match value {
            Some(value) => self.builder.build_return(Some(&value)),
            None => self.builder.build_return(None),
        };
        result
            .map(|_| ())
            .map_err(|e| CodegenError::Backend(e.to_string()))
    }

    fn emit_integer_constant(&mut self, ty: ValueType, text: &str) -> Result<IntValue<'ctx>, CodegenError> {
        let value = parse_integer_literal(text, ty)?;
        // Two's complement bits; LLVM keeps the low `bit_width` of them.
        Ok(self.int_type(ty).const_int(value as u64, true))
    }

    fn render_textual_ir(&self, module: &Module<'ctx>) -> String {
        module.print_to_string().to_string()
    }

    fn emit_object_file(&self, module: &Module<'ctx>, path: &Path) -> Result<(), CodegenError> {
        let machine = self.target_machine()?;

        module.set_triple(&machine.get_triple());
        module.set_data_layout(&machine.get_target_data().get_data_layout());

        machine
            .write_to_file(module, FileType::Object, path)
            .map_err(|e| CodegenError::Backend(e.to_string()))
    }
}
