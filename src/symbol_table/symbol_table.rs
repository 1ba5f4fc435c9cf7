use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::types::Type,
    compiler::instruction::Operand,
    errors::errors::ErrorImpl,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub var_type: Type,
    pub is_temporary: bool,
}

/// Every name an instruction may refer to, with its fixed type.
///
/// One table lives for exactly one compilation.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: HashMap<String, Variable>,
    next_temporary: usize,
    temporaries: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Registers a declared variable. Declaring a name twice is an error.
    pub fn declare(&mut self, name: &str, var_type: Type) -> Result<(), ErrorImpl> {
        if self.variables.contains_key(name) {
            return Err(ErrorImpl::VariableAlreadyDeclared {
                variable: String::from(name),
            });
        }

        self.variables.insert(
            String::from(name),
            Variable {
                name: String::from(name),
                var_type,
                is_temporary: false,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&Variable, ErrorImpl> {
        self.variables
            .get(name)
            .ok_or_else(|| ErrorImpl::UnknownVariable {
                variable: String::from(name),
            })
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Allocates a fresh temporary of the given type and returns its name.
    ///
    /// Names already taken by declared variables are skipped.
    pub fn new_temporary(&mut self, var_type: Type) -> String {
        let mut name = format!("t{}", self.next_temporary);
        while self.variables.contains_key(&name) {
            self.next_temporary += 1;
            name = format!("t{}", self.next_temporary);
        }
        self.next_temporary += 1;
        self.temporaries += 1;

        trace!("allocated temporary {} of type {}", name, var_type);
        self.variables.insert(
            name.clone(),
            Variable {
                name: name.clone(),
                var_type,
                is_temporary: true,
            },
        );
        name
    }

    /// Allocates a temporary with the type of an existing variable.
    pub fn temporary_like(&mut self, name: &str) -> Result<String, ErrorImpl> {
        let var_type = self.lookup(name)?.var_type;
        Ok(self.new_temporary(var_type))
    }

    /// Literals carry their own type; names are looked up.
    pub fn type_of(&self, operand: &Operand) -> Result<Type, ErrorImpl> {
        match operand {
            Operand::Literal(literal) => Ok(literal.get_type()),
            Operand::Name(name) => Ok(self.lookup(name)?.var_type),
            Operand::Jump(target) => Err(ErrorImpl::JumpTargetAsValue {
                target: target.to_string(),
            }),
        }
    }

    pub fn is_float(&self, operand: &Operand) -> Result<bool, ErrorImpl> {
        Ok(self.type_of(operand)?.is_float())
    }

    /// Number of temporaries allocated so far.
    pub fn temporaries(&self) -> usize {
        self.temporaries
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
