/// Core shunting-yard conversion.
///
/// Contains the `Converter`, its operator-stack handling, and the
/// `Conversion` result.
pub mod core;

/// Conversion step records.
///
/// Describes one step of a traced conversion: the token consumed, the output
/// and operator stack afterwards, and the action taken.
pub mod step;
