use crate::function::Function;
use hashbrown::{HashMap, HashSet};

/// Name of the only variable of an expression
pub const VARIABLE: &str = "x";

lazy_static! {
    /// Every word and operator an expression may contain. Numbers, spaces
    /// and parenthesis are always accepted.
    pub static ref ALLOWED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(VARIABLE);
        for func in &[Function::Sin, Function::Cos, Function::Sqrt, Function::Exp] {
            set.insert(func.name());
        }
        for op in &["/", "+", "*", "^", "-"] {
            set.insert(*op);
        }
        set.shrink_to_fit();
        set
    };

    /// Function names and the function they are translated to
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::new();
        map.insert("sin", Function::Sin);
        map.insert("cos", Function::Cos);
        map.insert("sqrt", Function::Sqrt);
        map.insert("exp", Function::Exp);
        map.shrink_to_fit();
        map
    };
}

#[cfg(test)]
mod tests {
    use super::{ALLOWED_WORDS, FUNCTIONS, VARIABLE};

    #[test]
    fn tables() {
        assert_eq!(ALLOWED_WORDS.len(), 10);
        assert!(ALLOWED_WORDS.contains(VARIABLE));
        for (name, func) in FUNCTIONS.iter() {
            assert!(ALLOWED_WORDS.contains(*name));
            assert_eq!(func.name(), *name);
        }
        assert!(!ALLOWED_WORDS.contains("tan"));
    }
}
