//! Custom validation rules used from a request struct outside the crate

#[cfg(test)]
mod validation_tests {
    use geo_api::validation::{self, validate_request, Field, FieldLabels};
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct RegisterUserRequest {
        #[validate(length(min = 1, max = 20))]
        display_name: String,
        #[validate(custom(function = "geo_api::validation::rules::password"))]
        password: String,
        #[validate(custom(function = "geo_api::validation::rules::vcs"))]
        session_token: String,
        #[validate(custom(function = "geo_api::validation::rules::datetime"))]
        agreed_at: String,
    }

    impl FieldLabels for RegisterUserRequest {
        const FIELDS: &'static [Field] = &[
            Field::labelled("display_name", "表示名", &["length"]),
            Field::labelled("password", "パスワード", &["password"]),
            Field::labelled("session_token", "セッショントークン", &["vcs"]),
            Field::labelled("agreed_at", "同意日時", &["datetime"]),
        ];
    }

    fn valid_request() -> RegisterUserRequest {
        RegisterUserRequest {
            display_name: "山田太郎".to_string(),
            password: "Passw0rd!".to_string(),
            session_token: "vcs-Zx9Yw8Vu".to_string(),
            agreed_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        validation::init();
        assert!(validate_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_every_field_reported_in_declaration_order() {
        let request = RegisterUserRequest {
            display_name: String::new(),
            password: "password".to_string(),
            session_token: "vcf-Zx9Yw8Vu".to_string(),
            agreed_at: "2024-01-01".to_string(),
        };

        let failure = validate_request(&request).unwrap_err();
        let attributes: Vec<&str> = failure
            .violations()
            .iter()
            .map(|v| v.attribute.as_str())
            .collect();
        assert_eq!(
            attributes,
            vec!["表示名", "パスワード", "セッショントークン", "同意日時"]
        );

        let messages: Vec<&str> = failure
            .violations()
            .iter()
            .map(|v| v.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "表示名の長さは1文字以上20文字以下でなければなりません",
                "パスワードは8文字以上20文字以下で、大文字、小文字、数字、特殊文字をそれぞれ1つ以上含む必要があります",
                "セッショントークンは`vcs-`と8文字の文字列である必要があります",
                "同意日時は日付時刻形式である必要があります",
            ]
        );
    }

    #[test]
    fn test_concurrent_validation_matches_sequential() {
        let sequential = validate_request(&RegisterUserRequest {
            password: "short".to_string(),
            ..valid_request()
        })
        .unwrap_err();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    validate_request(&RegisterUserRequest {
                        password: "short".to_string(),
                        ..valid_request()
                    })
                    .unwrap_err()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), sequential);
        }
    }
}
