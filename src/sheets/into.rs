pub trait MyInto<T> {
    fn my_into(self) -> T;
}

impl MyInto<Vec<String>> for Vec<Vec<serde_json::Value>> {
    fn my_into(self) -> Vec<String> {
        self.into_iter()
            .flatten()
            .map(|v| v.to_string().replace('\"', ""))
            .collect::<Vec<String>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn flattens_rows_into_first_column_strings() {
        let values = vec![
            vec![Value::String("TRUE".to_owned())],
            vec![Value::String("0xabc".to_owned())],
        ];
        let strings: Vec<String> = values.my_into();
        assert_eq!(strings, vec!["TRUE".to_owned(), "0xabc".to_owned()]);
    }

    #[test]
    fn numbers_become_plain_strings() {
        let values = vec![vec![Value::from(18)]];
        let strings: Vec<String> = values.my_into();
        assert_eq!(strings, vec!["18".to_owned()]);
    }
}
