//! Screening and aggregation pipelines against a scripted HTTP client

mod common;

use common::{MockClient, Recorder, client, profile, quarters, small_tech};
use fmprep::aggregate::{FinancialStatements, STATEMENTS_LABEL, fetch_all_financial_statements};
use fmprep::fetch;
use fmprep::report::Operation;
use fmprep::request::common::StatementKind;
use fmprep::screen::{
    MalformedRow, PROFILE_LABEL, Screen, ScreenCriteria, filter_and_merge, filter_and_merge_with,
};
use fmprep::Error;
use serde_json::{Value, json};

#[tokio::test]
async fn small_cap_profile_is_included() {
    let fmp = client(MockClient::default().profile(json!({
        "symbol": "AAA",
        "mktCap": 500000000,
        "sector": "Technology",
        "industry": "Software",
        "companyName": "AAA Corp",
        "country": "US"
    })));

    let out = filter_and_merge(&fmp, &["AAA"], &()).await.unwrap();
    assert_eq!(out.symbols().unwrap(), ["AAA"]);
    assert_eq!(out.get(0, "companyName"), Some(&json!("AAA Corp")));
}

#[tokio::test]
async fn large_cap_profile_is_excluded() {
    let fmp = client(MockClient::default().profile(json!({
        "symbol": "AAA",
        "mktCap": 2000000000u64,
        "sector": "Technology",
        "industry": "Software",
        "companyName": "AAA Corp",
        "country": "US"
    })));

    let out = filter_and_merge(&fmp, &["AAA"], &()).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn depositary_receipt_is_excluded() {
    let fmp = client(MockClient::default().profile(json!({
        "symbol": "AAA",
        "mktCap": 500000000,
        "sector": "Technology",
        "industry": "Software",
        "companyName": "AAA Depositary Receipts",
        "country": "US"
    })));

    let out = filter_and_merge(&fmp, &["AAA"], &()).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn screen_keeps_input_order_minus_rejects() {
    let mock = MockClient::default()
        .profile(small_tech("DDD"))
        .profile(profile("BNK", 1e8, "Financial Services", "Banks", "Bank Co", "US"))
        .profile(small_tech("AAA"))
        .profile(profile("UTL", 1e8, "Utilities", "Power", "Power Co", "US"))
        .profile(profile("INS", 1e8, "Healthcare", "Insurance", "Care Co", "US"))
        .profile(profile("LDN", 1e8, "Technology", "Software", "London Co", "GB"))
        .profile(profile("CAN", 1e8, "Energy", "Oil & Gas", "Maple Co", "CA"))
        .profile(small_tech("BBB"));
    let fmp = client(mock);

    let symbols = ["DDD", "BNK", "AAA", "UTL", "INS", "LDN", "CAN", "BBB"];
    let out = filter_and_merge(&fmp, &symbols, &()).await.unwrap();
    assert_eq!(out.symbols().unwrap(), ["DDD", "AAA", "CAN", "BBB"]);

    // every surviving row satisfies the whole conjunction
    let criteria = ScreenCriteria::default();
    for (i, row) in out.rows().iter().enumerate() {
        let p = fmprep::model::SymbolProfile::from_record(i, row).unwrap();
        assert!(criteria.passes(&p));
        assert!(p.mkt_cap < 1_000_000_000.0);
        assert!(["US", "CA"].contains(&p.country.as_str()));
    }
}

#[tokio::test]
async fn failed_profiles_are_skipped_and_reported() {
    let mock = MockClient::default()
        .profile(small_tech("AAA"))
        .route("/api/v3/profile/ERR", 500, "boom")
        .json("/api/v3/profile/NIL", json!([]))
        .profile(small_tech("BBB"));
    let fmp = client(mock);
    let recorder = Recorder::default();

    let out = filter_and_merge(&fmp, &["AAA", "ERR", "MISSING", "NIL", "BBB"], &recorder)
        .await
        .unwrap();
    assert_eq!(out.symbols().unwrap(), ["AAA", "BBB"]);

    let failures = recorder.failures();
    let failed: Vec<_> = failures.iter().map(|f| (f.symbol.clone().unwrap(), f.status)).collect();
    assert_eq!(
        failed,
        [
            ("ERR".to_string(), Some(500)),
            ("MISSING".to_string(), Some(404)),
            ("NIL".to_string(), None),
        ]
    );
    assert!(failures.iter().all(|f| f.operation == Operation::Profile));

    // progress is per symbol, failed or not
    assert_eq!(recorder.advances(), 5);
    assert_eq!(recorder.events().first().unwrap(), &format!("begin {PROFILE_LABEL} 5"));
    assert_eq!(recorder.events().last().unwrap(), "finish");
}

#[tokio::test]
async fn profile_missing_a_field_aborts_the_run() {
    let mock = MockClient::default()
        .profile(small_tech("AAA"))
        .profile(json!({"symbol": "BAD", "mktCap": 1, "sector": "Technology", "industry": "Software", "companyName": "Bad"}));
    let fmp = client(mock);

    let err = filter_and_merge(&fmp, &["AAA", "BAD"], &()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField { row: 1, field: "country", .. }
    ));

    let skip = Screen::default().on_malformed(MalformedRow::Skip);
    let out = filter_and_merge_with(&fmp, &["AAA", "BAD"], &skip, &()).await.unwrap();
    assert_eq!(out.symbols().unwrap(), ["AAA"]);
}

#[tokio::test]
async fn transport_errors_propagate() {
    let fmp = client(MockClient::default().route("/api/v3/profile/AAA", 200, "not json"));
    let err = filter_and_merge(&fmp, &["AAA"], &()).await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn statement_row_counts_sum_over_symbols() {
    let mock = MockClient::default()
        .statements("AAA", quarters("AAA", 3), quarters("AAA", 2), quarters("AAA", 4))
        .statements("BBB", quarters("BBB", 5), json!([]), quarters("BBB", 1))
        .statements("CCC", json!([]), quarters("CCC", 7), json!([]));
    let fmp = client(mock);

    let statements = fetch_all_financial_statements(&fmp, &["AAA", "BBB", "CCC"], &())
        .await
        .unwrap();
    assert_eq!(statements.income_statement.height(), 3 + 5);
    assert_eq!(statements.balance_sheet.height(), 2 + 7);
    assert_eq!(statements.cash_flow.height(), 4 + 1);

    // rows are stacked in symbol order
    assert_eq!(
        statements.get(StatementKind::IncomeStatement).symbols().unwrap(),
        ["AAA", "AAA", "AAA", "BBB", "BBB", "BBB", "BBB", "BBB"]
    );
    assert_eq!(
        statements.balance_sheet.symbols().unwrap()[..2],
        ["AAA".to_string(), "AAA".to_string()]
    );
}

#[tokio::test]
async fn all_empty_statements_give_empty_tables() {
    let mock = MockClient::default()
        .statements("AAA", json!([]), json!([]), json!([]))
        .statements("BBB", json!([]), json!([]), json!([]));
    let fmp = client(mock);

    let (income, balance, cash_flow) = fetch_all_financial_statements(&fmp, &["AAA", "BBB"], &())
        .await
        .unwrap()
        .into_parts();
    for table in [income, balance, cash_flow] {
        assert!(table.is_empty());
        assert_eq!(table.width(), 0);
    }
}

#[tokio::test]
async fn no_symbols_gives_empty_tables() {
    let fmp = client(MockClient::default());
    let symbols: [&str; 0] = [];
    let statements = fetch_all_financial_statements(&fmp, &symbols, &()).await.unwrap();
    assert_eq!(statements, FinancialStatements::default());
    assert!(fmp.client().calls().is_empty());
}

#[tokio::test]
async fn refused_statement_is_skipped_and_named() {
    let mock = MockClient::default()
        .statements("AAA", quarters("AAA", 2), quarters("AAA", 2), quarters("AAA", 2))
        .statements("BBB", quarters("BBB", 1), quarters("BBB", 1), quarters("BBB", 1));
    let fmp = client(mock);
    let recorder = Recorder::default();

    let statements = fetch_all_financial_statements(&fmp, &["AAA", "ZZZ", "BBB"], &recorder)
        .await
        .unwrap();
    assert_eq!(statements.income_statement.symbols().unwrap(), ["AAA", "AAA", "BBB"]);
    assert_eq!(statements.cash_flow.height(), 3);

    let failures = recorder.failures();
    assert_eq!(failures.len(), 3);
    for (failure, kind) in failures.iter().zip(StatementKind::ALL) {
        assert_eq!(failure.symbol.as_deref(), Some("ZZZ"));
        assert_eq!(failure.operation, Operation::Statement(kind));
        assert_eq!(failure.status, Some(404));
    }
    assert_eq!(
        failures[1].to_string(),
        "Failed to fetch balance sheet for symbol ZZZ (status 404)"
    );

    assert_eq!(recorder.advances(), 3);
    assert_eq!(recorder.events()[0], format!("begin {STATEMENTS_LABEL} 3"));
}

#[tokio::test]
async fn non_array_statement_counts_as_no_data() {
    let mock = MockClient::default().statements(
        "AAA",
        json!({"Error Message": "Limit Reach"}),
        quarters("AAA", 2),
        quarters("AAA", 1),
    );
    let fmp = client(mock);
    let recorder = Recorder::default();

    let statements = fetch_all_financial_statements(&fmp, &["AAA"], &recorder).await.unwrap();
    assert!(statements.income_statement.is_empty());
    assert_eq!(statements.balance_sheet.height(), 2);
    assert_eq!(recorder.failures().len(), 1);
    assert_eq!(recorder.failures()[0].status, None);
}

#[tokio::test]
async fn statement_columns_are_unioned() {
    let mock = MockClient::default()
        .statements(
            "AAA",
            json!([{"date": "2024-03-31", "symbol": "AAA", "revenues": 1}]),
            json!([]),
            json!([]),
        )
        .statements(
            "BBB",
            json!([{"date": "2024-03-31", "symbol": "BBB", "costofrevenue": 2}]),
            json!([]),
            json!([]),
        );
    let fmp = client(mock);

    let statements = fetch_all_financial_statements(&fmp, &["AAA", "BBB"], &()).await.unwrap();
    let income = statements.income_statement;
    assert_eq!(income.columns(), ["date", "symbol", "revenues", "costofrevenue"]);
    assert_eq!(income.get(0, "costofrevenue"), Some(&Value::Null));
    assert_eq!(income.get(1, "revenues"), Some(&Value::Null));
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let build = || {
        client(
            MockClient::default()
                .profile(small_tech("AAA"))
                .profile(small_tech("BBB"))
                .statements("AAA", quarters("AAA", 2), quarters("AAA", 3), json!([]))
                .statements("BBB", quarters("BBB", 1), json!([]), quarters("BBB", 2)),
        )
    };

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let fmp = build();
        let screened = filter_and_merge(&fmp, &["AAA", "BBB"], &()).await.unwrap();
        let statements = fetch_all_financial_statements(&fmp, &screened.symbols().unwrap(), &())
            .await
            .unwrap();
        outputs.push((
            screened.to_json().unwrap(),
            statements.income_statement.to_json().unwrap(),
            statements.balance_sheet.to_json().unwrap(),
            statements.cash_flow.to_json().unwrap(),
        ));
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[tokio::test]
async fn statement_requests_use_quarterly_pages_of_fifty() {
    let fmp = client(MockClient::default().statements("AAA", json!([]), json!([]), json!([])));
    fetch_all_financial_statements(&fmp, &["AAA"], &()).await.unwrap();

    assert_eq!(
        fmp.client().calls(),
        [
            "https://financialmodelingprep.com/api/v3/income-statement-as-reported/AAA?period=quarter&limit=50&apikey=test_key",
            "https://financialmodelingprep.com/api/v3/balance-sheet-statement-as-reported/AAA?period=quarter&limit=50&apikey=test_key",
            "https://financialmodelingprep.com/api/v3/cash-flow-statement-as-reported/AAA?period=quarter&limit=50&apikey=test_key",
        ]
    );
}

#[tokio::test]
async fn universe_lists() {
    let mock = MockClient::default()
        .json(
            "/api/v3/stock/list",
            json!([
                {"symbol": "AAA", "name": "AAA Corp", "exchange": "NASDAQ", "exchangeShortName": "NASDAQ", "type": "stock"},
                {"symbol": "EEE", "name": "EEE Fund", "price": 9.5, "type": "etf"}
            ]),
        )
        .json("/api/v3/financial-statement-symbol-lists", json!(["AAA", "BBB", "CCC"]));
    let fmp = client(mock);

    let stocks = fetch::fetch_stock_list(&fmp, &()).await.unwrap().unwrap();
    assert_eq!(stocks.height(), 2);
    assert_eq!(stocks.columns(), ["symbol", "name", "exchange", "exchangeShortName", "type", "price"]);
    assert_eq!(stocks.listings().unwrap()[1].kind.as_deref(), Some("etf"));

    let covered = fetch::fetch_financial_statement_symbol_list(&fmp, &()).await.unwrap().unwrap();
    assert_eq!(covered.symbols().unwrap(), ["AAA", "BBB", "CCC"]);
}

#[tokio::test]
async fn refused_list_is_none() {
    let fmp = client(MockClient::default().route("/api/v3/stock/list", 401, "Invalid API KEY"));
    let recorder = Recorder::default();

    assert!(fetch::fetch_stock_list(&fmp, &recorder).await.unwrap().is_none());
    assert!(
        fetch::fetch_financial_statement_symbol_list(&fmp, &recorder)
            .await
            .unwrap()
            .is_none()
    );

    let failures = recorder.failures();
    assert_eq!(failures[0].operation, Operation::StockList);
    assert_eq!(failures[0].status, Some(401));
    assert_eq!(failures[0].detail, "Invalid API KEY");
    assert_eq!(failures[1].operation, Operation::StatementSymbolList);
}

#[tokio::test]
async fn missing_api_key_is_an_error_not_a_skip() {
    let fmp = fmprep::FmpClient::from_client(MockClient::default().profile(small_tech("AAA")));
    let err = filter_and_merge(&fmp, &["AAA"], &()).await.unwrap_err();
    assert!(matches!(err, Error::MissingApiKey));
    assert!(fmp.client().calls().is_empty());
}

#[tokio::test]
async fn single_statement_fetchers() {
    let fmp = client(MockClient::default().statements("AAA", quarters("AAA", 2), json!([]), quarters("AAA", 1)));

    assert_eq!(fetch::fetch_income_statement(&fmp, "AAA", &()).await.unwrap().len(), 2);
    assert!(fetch::fetch_balance_sheet(&fmp, "AAA", &()).await.unwrap().is_empty());
    assert_eq!(fetch::fetch_cash_flow(&fmp, "AAA", &()).await.unwrap().len(), 1);
    assert!(fetch::fetch_cash_flow(&fmp, "ZZZ", &()).await.unwrap().is_empty());

    let profile = fetch::fetch_symbol_profile(&fmp, "AAA", &()).await.unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn odd_symbols_are_encoded_and_skipped() {
    let mock = MockClient::default()
        .statements("AAA", quarters("AAA", 2), quarters("AAA", 1), quarters("AAA", 1))
        .profile(small_tech("AAA"));
    let fmp = client(mock);
    let recorder = Recorder::default();

    let statements = fetch_all_financial_statements(&fmp, &["BRK A", "AAA"], &recorder)
        .await
        .unwrap();
    assert_eq!(statements.income_statement.symbols().unwrap(), ["AAA", "AAA"]);
    assert_eq!(
        fmp.client().calls()[0],
        "https://financialmodelingprep.com/api/v3/income-statement-as-reported/BRK%20A?period=quarter&limit=50&apikey=test_key"
    );

    let failures = recorder.failures();
    assert_eq!(failures.len(), 3);
    assert!(failures.iter().all(|f| f.symbol.as_deref() == Some("BRK A") && f.status == Some(404)));

    // reserved characters stay inside the path segment
    let screened = filter_and_merge(&fmp, &["X?limit=1#", "AAA"], &()).await.unwrap();
    assert_eq!(screened.symbols().unwrap(), ["AAA"]);
    assert!(
        fmp.client()
            .calls()
            .contains(&"https://financialmodelingprep.com/api/v3/profile/X%3Flimit=1%23?apikey=test_key".to_string())
    );
}

#[tokio::test]
async fn progress_is_finished_when_a_run_fails() {
    let fmp = client(
        MockClient::default()
            .profile(small_tech("AAA"))
            .route("/api/v3/profile/BAD", 200, "not json")
            .route("/api/v3/income-statement-as-reported/BAD", 200, "not json"),
    );

    let recorder = Recorder::default();
    assert!(filter_and_merge(&fmp, &["AAA", "BAD", "CCC"], &recorder).await.is_err());
    assert_eq!(recorder.events().last().unwrap(), "finish");
    assert_eq!(recorder.advances(), 1);

    let recorder = Recorder::default();
    assert!(
        fetch_all_financial_statements(&fmp, &["BAD"], &recorder)
            .await
            .is_err()
    );
    assert_eq!(recorder.events(), [format!("begin {STATEMENTS_LABEL} 1"), "finish".to_string()]);
}
