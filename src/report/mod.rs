use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassMethods {
    pub class_name: String,
    pub signatures: Vec<String>,
}

// Mapping from fully qualified class name to the private-method signatures
// found for it. Classes are kept in discovery order; a class with no matched
// signatures is never inserted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MethodReport {
    classes: Vec<ClassMethods>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl MethodReport {
    pub fn new() -> Self {
        MethodReport {
            classes: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn add_class(&mut self, class_name: String, signatures: Vec<String>) {
        if signatures.is_empty() {
            return;
        }

        match self.by_name.get(&class_name) {
            Some(&idx) => {
                self.classes[idx].signatures.extend(signatures);
            }
            None => {
                self.by_name.insert(class_name.clone(), self.classes.len());
                self.classes.push(ClassMethods {
                    class_name,
                    signatures,
                });
            }
        }
    }

    pub fn get(&self, class_name: &str) -> Option<&[String]> {
        self.by_name
            .get(class_name)
            .map(|&idx| self.classes[idx].signatures.as_slice())
    }

    pub fn classes(&self) -> &[ClassMethods] {
        &self.classes
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.signatures.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
