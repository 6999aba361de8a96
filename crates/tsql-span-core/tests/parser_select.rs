//! Tests for SELECT statements and their clauses.

mod common;
use common::*;

use tsql_span_core::{parse_statements, ClauseKind, StatementKind, TokenType};

#[test]
fn select_only() {
    let s = parse_select("SELECT 1");
    assert_eq!(clause_text(&s.select), "SELECT 1");
    assert!(s.from.is_none());
    assert!(s.where_clause.is_none());
}

#[test]
fn select_all_core_clauses() {
    let sql = "SELECT DISTINCT TOP 10 a, COUNT(*) AS n INTO #t FROM dbo.t \
               WHERE b = 1 GROUP BY a HAVING COUNT(*) > 1 ORDER BY n DESC";
    let s = parse_select(sql);
    assert_eq!(clause_text(&s.select), "SELECT DISTINCT TOP 10 a , COUNT ( * ) AS n");
    assert_eq!(clause_text(s.into.as_ref().unwrap()), "INTO #t");
    assert_eq!(clause_text(s.from.as_ref().unwrap()), "FROM dbo.t");
    assert_eq!(clause_text(s.where_clause.as_ref().unwrap()), "WHERE b = 1");
    assert_eq!(clause_text(s.group_by.as_ref().unwrap()), "GROUP BY a");
    assert_eq!(clause_text(s.having.as_ref().unwrap()), "HAVING COUNT ( * ) > 1");
    assert_eq!(clause_text(s.order_by.as_ref().unwrap()), "ORDER BY n DESC");
}

#[test]
fn where_clause_counts_connectors() {
    let s = parse_select("SELECT x FROM t WHERE a = 1 AND b = 2 OR c = 3");
    let where_clause = s.where_clause.unwrap();
    let connectors = where_clause
        .tokens()
        .iter()
        .filter(|t| t.token_type() == TokenType::Connector)
        .count();
    assert_eq!(connectors, 2);
}

#[test]
fn clause_positions_are_inclusive() {
    let sql = "SELECT x FROM t WHERE a = 1";
    let s = parse_select(sql);
    let where_clause = s.where_clause.unwrap();
    assert_eq!(where_clause.begin_position(), 16);
    assert_eq!(where_clause.end_position(), 26);
    assert_eq!(where_clause.length(), 11);
    assert_eq!(
        source_of(sql, where_clause.begin_position(), where_clause.end_position()),
        "WHERE a = 1"
    );
}

#[test]
fn statement_positions() {
    let sql = "  SELECT a FROM t  ";
    let statements = parse_all(sql);
    assert_eq!(statements[0].begin_position(), 2);
    assert_eq!(statements[0].end_position(), 16);
    assert_eq!(statements[0].length(), 15);
    assert_eq!(statements[0].kind(), StatementKind::Select);
}

#[test]
fn joins_stay_in_from() {
    let s = parse_select(
        "SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id CROSS JOIN c \
         INNER JOIN d WITH (NOLOCK) ON d.x = a.x WHERE 1 = 1",
    );
    let from = s.from.unwrap();
    assert_eq!(from.tokens().last().map(|t| t.text()), Some("a.x"));
    assert!(s.where_clause.is_some());
}

#[test]
fn case_expression_in_select_list() {
    let s = parse_select("SELECT CASE WHEN a = 1 THEN 'x' ELSE 'y' END AS c FROM t");
    assert_eq!(s.select.tokens().len(), 13);
    assert!(s.from.is_some());
}

#[test]
fn builtin_function_keywords_do_not_end_clauses() {
    let s = parse_select(
        "SELECT COALESCE(a, b), LEFT(name, 3), CONVERT(int, c) FROM t WHERE NULLIF(a, 0) IS NULL",
    );
    assert_eq!(s.select.tokens().last().map(|t| t.text()), Some(")"));
    assert_eq!(
        clause_text(s.where_clause.as_ref().unwrap()),
        "WHERE NULLIF ( a , 0 ) IS NULL"
    );
}

#[test]
fn window_functions() {
    let s = parse_select(
        "SELECT ROW_NUMBER() OVER (PARTITION BY a ORDER BY b) AS rn FROM t ORDER BY rn",
    );
    assert!(s.select.tokens().iter().any(|t| t.text() == "PARTITION"));
    assert_eq!(clause_text(s.order_by.as_ref().unwrap()), "ORDER BY rn");
}

#[test]
fn order_by_with_offset_fetch() {
    let s = parse_select("SELECT a FROM t ORDER BY a OFFSET 10 ROWS FETCH NEXT 5 ROWS ONLY");
    assert_eq!(s.order_by.unwrap().tokens().len(), 11);
}

#[test]
fn set_operations() {
    let s = parse_select(
        "SELECT a FROM t UNION ALL SELECT a FROM u INTERSECT SELECT a FROM v ORDER BY a",
    );
    assert_eq!(s.set_operations.len(), 2);
    assert_eq!(clause_text(&s.set_operations[0].operator), "UNION ALL");
    assert_eq!(clause_text(&s.set_operations[1].operator), "INTERSECT");
    assert_eq!(
        clause_text(s.set_operations[1].query.from.as_ref().unwrap()),
        "FROM v"
    );
    assert!(s.order_by.is_some());
}

#[test]
fn parenthesized_set_operand() {
    let sql = "SELECT a FROM t UNION ALL (SELECT b FROM u WHERE c = 1) ORDER BY a";
    let s = parse_select(sql);
    assert_eq!(s.set_operations.len(), 1);
    let operation = &s.set_operations[0];
    assert_eq!(clause_text(&operation.operator), "UNION ALL (");
    assert_eq!(
        clause_text(operation.query.where_clause.as_ref().unwrap()),
        "WHERE c = 1 )"
    );
    assert_eq!(clause_text(s.order_by.as_ref().unwrap()), "ORDER BY a");

    let statements = parse_statements(sql, false, true).unwrap();
    let rebuilt: String = statements[0].tokens().map(|t| t.text()).collect();
    assert_eq!(rebuilt, sql);
}

#[test]
fn quantified_and_escaped_predicates() {
    let s = parse_select("SELECT a FROM t WHERE a > ALL (SELECT b FROM u) ORDER BY a");
    assert_eq!(
        clause_text(s.where_clause.as_ref().unwrap()),
        "WHERE a > ALL ( SELECT b FROM u )"
    );
    assert!(s.order_by.is_some());

    let s = parse_select("SELECT a FROM t WHERE a = ANY (SELECT b FROM u) OR a = SOME (SELECT c FROM v)");
    assert_eq!(s.where_clause.unwrap().connectors().count(), 1);

    let s = parse_select("SELECT a FROM t WHERE a LIKE 'x!%' ESCAPE '!'");
    assert_eq!(
        clause_text(s.where_clause.as_ref().unwrap()),
        "WHERE a LIKE 'x!%' ESCAPE '!'"
    );

    let s = parse_select("SELECT a FROM t WHERE CONTAINS(a, 'x') AND FREETEXT(b, 'y')");
    assert_eq!(s.where_clause.unwrap().tokens().len(), 14);
}

#[test]
fn for_and_option_clauses() {
    let s = parse_select("SELECT a FROM t FOR XML PATH('row'), ROOT('rows') OPTION (RECOMPILE)");
    assert_eq!(clause_text(s.for_clause.as_ref().unwrap()), "FOR XML PATH ( 'row' ) , ROOT ( 'rows' )");
    assert_eq!(clause_text(s.option.as_ref().unwrap()), "OPTION ( RECOMPILE )");
}

#[test]
fn common_table_expression() {
    let s = parse_select("WITH c (x) AS (SELECT 1), d AS (SELECT x FROM c) SELECT * FROM d");
    let with = s.with.as_ref().unwrap();
    assert_eq!(with.kind(), ClauseKind::With);
    assert_eq!(with.tokens().last().map(|t| t.text()), Some(")"));
    assert_eq!(clause_text(s.from.as_ref().unwrap()), "FROM d");
}

#[test]
fn clauses_in_source_order() {
    let statement = parse("SELECT a FROM t UNION SELECT b FROM u ORDER BY 1");
    let kinds: Vec<ClauseKind> = statement.clauses().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![
        ClauseKind::Select,
        ClauseKind::From,
        ClauseKind::SetOperator,
        ClauseKind::Select,
        ClauseKind::From,
        ClauseKind::OrderBy,
    ]);
    let begins: Vec<usize> = statement.clauses().iter().map(|c| c.begin_position()).collect();
    assert!(begins.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn comments_and_whitespace_kept_in_clauses() {
    let sql = "SELECT a /* why */ FROM t\n-- filter\nWHERE b = 1";
    let statements = parse_statements(sql, false, true).unwrap();
    let s = statements[0].as_select().unwrap();
    let from = s.from.as_ref().unwrap();
    assert!(from.tokens().iter().any(|t| t.token_type() == TokenType::SingleLineComment));
    let rebuilt: String = statements[0].tokens().map(|t| t.text()).collect();
    assert_eq!(rebuilt, sql);
}

#[test]
fn multiple_statements() {
    let statements = parse_all("SELECT 1; SELECT 2\nSELECT 3;;");
    assert_eq!(statements.len(), 3);
    assert_eq!(statements[2].begin_position(), 19);
}
