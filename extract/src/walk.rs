use crate::error::TagError;
use crate::types::{Field, Message, OneOf, SchemaFile};

/// Visitor over the schema node kinds. Default method bodies pass
/// through, so implementors override only the kinds they care about.
pub trait Visitor {
    fn visit_file(&mut self, _file: &SchemaFile) -> Result<(), TagError> {
        Ok(())
    }

    fn visit_message(&mut self, _message: &Message) -> Result<(), TagError> {
        Ok(())
    }

    fn visit_one_of(&mut self, _message: &Message, _oneof: &OneOf) -> Result<(), TagError> {
        Ok(())
    }

    fn visit_field(&mut self, _message: &Message, _field: &Field) -> Result<(), TagError> {
        Ok(())
    }
}

/// Depth-first traversal of one schema file. The first error aborts the
/// walk; there is no partial recovery.
pub fn walk<V: Visitor>(visitor: &mut V, file: &SchemaFile) -> Result<(), TagError> {
    visitor.visit_file(file)?;
    for message in &file.messages {
        walk_message(visitor, message)?;
    }
    Ok(())
}

fn walk_message<V: Visitor>(visitor: &mut V, message: &Message) -> Result<(), TagError> {
    visitor.visit_message(message)?;
    for field in &message.fields {
        visitor.visit_field(message, field)?;
    }
    for oneof in &message.oneofs {
        visitor.visit_one_of(message, oneof)?;
    }
    for nested in &message.messages {
        walk_message(visitor, nested)?;
    }
    Ok(())
}
