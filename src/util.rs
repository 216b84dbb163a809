/// Stack growth for the recursive parser and evaluator.
pub mod stack;
