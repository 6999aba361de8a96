//! Static lexical tables: reserved keywords, built-in system identifiers
//! and system variables.

/// Declares the `Keyword` enum together with its spelling table.
macro_rules! keywords {
    ($($variant:ident => $text:literal,)+) => {
        /// T-SQL reserved keywords.
        ///
        /// `AND`/`OR` and the operator words `LIKE`, `NOT`, `IS`, `IN` have
        /// codes here even though the classifier turns them into Connector
        /// and Operator tokens rather than Keyword tokens.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[allow(missing_docs)]
        pub enum Keyword {
            $($variant,)+
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Attempts to parse a keyword from a string (case-insensitive).
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the keyword as it is spelled in SQL.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }
    };
}

keywords! {
    Add => "ADD",
    All => "ALL",
    Alter => "ALTER",
    And => "AND",
    Any => "ANY",
    As => "AS",
    Asc => "ASC",
    Authorization => "AUTHORIZATION",
    Backup => "BACKUP",
    Begin => "BEGIN",
    Between => "BETWEEN",
    Break => "BREAK",
    Browse => "BROWSE",
    Bulk => "BULK",
    By => "BY",
    Cascade => "CASCADE",
    Case => "CASE",
    Check => "CHECK",
    Checkpoint => "CHECKPOINT",
    Close => "CLOSE",
    Clustered => "CLUSTERED",
    Coalesce => "COALESCE",
    Collate => "COLLATE",
    Column => "COLUMN",
    Commit => "COMMIT",
    Compute => "COMPUTE",
    Constraint => "CONSTRAINT",
    Contains => "CONTAINS",
    Containstable => "CONTAINSTABLE",
    Continue => "CONTINUE",
    Convert => "CONVERT",
    Create => "CREATE",
    Cross => "CROSS",
    Current => "CURRENT",
    CurrentDate => "CURRENT_DATE",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    CurrentUser => "CURRENT_USER",
    Cursor => "CURSOR",
    Database => "DATABASE",
    Dbcc => "DBCC",
    Deallocate => "DEALLOCATE",
    Declare => "DECLARE",
    Default => "DEFAULT",
    Delete => "DELETE",
    Deny => "DENY",
    Desc => "DESC",
    Disk => "DISK",
    Distinct => "DISTINCT",
    Distributed => "DISTRIBUTED",
    Double => "DOUBLE",
    Drop => "DROP",
    Dump => "DUMP",
    Else => "ELSE",
    End => "END",
    Errlvl => "ERRLVL",
    Escape => "ESCAPE",
    Except => "EXCEPT",
    Exec => "EXEC",
    Execute => "EXECUTE",
    Exists => "EXISTS",
    Exit => "EXIT",
    External => "EXTERNAL",
    Fetch => "FETCH",
    File => "FILE",
    Fillfactor => "FILLFACTOR",
    For => "FOR",
    Foreign => "FOREIGN",
    Freetext => "FREETEXT",
    Freetexttable => "FREETEXTTABLE",
    From => "FROM",
    Full => "FULL",
    Function => "FUNCTION",
    Goto => "GOTO",
    Grant => "GRANT",
    Group => "GROUP",
    Having => "HAVING",
    Holdlock => "HOLDLOCK",
    Identity => "IDENTITY",
    IdentityInsert => "IDENTITY_INSERT",
    Identitycol => "IDENTITYCOL",
    If => "IF",
    In => "IN",
    Index => "INDEX",
    Inner => "INNER",
    Insert => "INSERT",
    Intersect => "INTERSECT",
    Into => "INTO",
    Is => "IS",
    Join => "JOIN",
    Key => "KEY",
    Kill => "KILL",
    Left => "LEFT",
    Like => "LIKE",
    Lineno => "LINENO",
    Load => "LOAD",
    Matched => "MATCHED",
    Merge => "MERGE",
    National => "NATIONAL",
    Nocheck => "NOCHECK",
    Nonclustered => "NONCLUSTERED",
    Not => "NOT",
    Null => "NULL",
    Nullif => "NULLIF",
    Of => "OF",
    Off => "OFF",
    Offsets => "OFFSETS",
    On => "ON",
    Open => "OPEN",
    Opendatasource => "OPENDATASOURCE",
    Openquery => "OPENQUERY",
    Openrowset => "OPENROWSET",
    Openxml => "OPENXML",
    Option => "OPTION",
    Or => "OR",
    Order => "ORDER",
    Outer => "OUTER",
    Output => "OUTPUT",
    Over => "OVER",
    Percent => "PERCENT",
    Pivot => "PIVOT",
    Plan => "PLAN",
    Precision => "PRECISION",
    Primary => "PRIMARY",
    Print => "PRINT",
    Proc => "PROC",
    Procedure => "PROCEDURE",
    Public => "PUBLIC",
    Raiserror => "RAISERROR",
    Read => "READ",
    Readtext => "READTEXT",
    Reconfigure => "RECONFIGURE",
    References => "REFERENCES",
    Replication => "REPLICATION",
    Restore => "RESTORE",
    Restrict => "RESTRICT",
    Return => "RETURN",
    Revert => "REVERT",
    Revoke => "REVOKE",
    Right => "RIGHT",
    Rollback => "ROLLBACK",
    Rowcount => "ROWCOUNT",
    Rowguidcol => "ROWGUIDCOL",
    Rule => "RULE",
    Save => "SAVE",
    Schema => "SCHEMA",
    Securityaudit => "SECURITYAUDIT",
    Select => "SELECT",
    Semantickeyphrasetable => "SEMANTICKEYPHRASETABLE",
    Semanticsimilaritydetailstable => "SEMANTICSIMILARITYDETAILSTABLE",
    Semanticsimilaritytable => "SEMANTICSIMILARITYTABLE",
    SessionUser => "SESSION_USER",
    Set => "SET",
    Setuser => "SETUSER",
    Shutdown => "SHUTDOWN",
    Some => "SOME",
    Statistics => "STATISTICS",
    SystemUser => "SYSTEM_USER",
    Table => "TABLE",
    Tablesample => "TABLESAMPLE",
    Textsize => "TEXTSIZE",
    Then => "THEN",
    To => "TO",
    Top => "TOP",
    Tran => "TRAN",
    Transaction => "TRANSACTION",
    Trigger => "TRIGGER",
    Truncate => "TRUNCATE",
    TryConvert => "TRY_CONVERT",
    Tsequal => "TSEQUAL",
    Union => "UNION",
    Unique => "UNIQUE",
    Unpivot => "UNPIVOT",
    Update => "UPDATE",
    Updatetext => "UPDATETEXT",
    Use => "USE",
    User => "USER",
    Using => "USING",
    Values => "VALUES",
    Varying => "VARYING",
    View => "VIEW",
    Waitfor => "WAITFOR",
    When => "WHEN",
    Where => "WHERE",
    While => "WHILE",
    With => "WITH",
    Writetext => "WRITETEXT",}

impl core::fmt::Display for Keyword {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Built-in function names, upper case and sorted for binary search.
const SYSTEM_IDENTIFIERS: &[&str] = &[
    "ABS",
    "ACOS",
    "APP_NAME",
    "ASCII",
    "ASIN",
    "ATAN",
    "ATN2",
    "AVG",
    "CAST",
    "CEILING",
    "CHAR",
    "CHARINDEX",
    "CHECKSUM",
    "CHOOSE",
    "CONCAT",
    "CONCAT_WS",
    "COS",
    "COT",
    "COUNT",
    "COUNT_BIG",
    "CUME_DIST",
    "DATALENGTH",
    "DATEADD",
    "DATEDIFF",
    "DATEFROMPARTS",
    "DATENAME",
    "DATEPART",
    "DAY",
    "DB_ID",
    "DB_NAME",
    "DEGREES",
    "DENSE_RANK",
    "DIFFERENCE",
    "EOMONTH",
    "ERROR_LINE",
    "ERROR_MESSAGE",
    "ERROR_NUMBER",
    "ERROR_PROCEDURE",
    "ERROR_SEVERITY",
    "ERROR_STATE",
    "EXP",
    "FIRST_VALUE",
    "FLOOR",
    "FORMAT",
    "GETDATE",
    "GETUTCDATE",
    "GROUPING",
    "HOST_NAME",
    "IIF",
    "ISDATE",
    "ISNULL",
    "ISNUMERIC",
    "JSON_QUERY",
    "JSON_VALUE",
    "LAG",
    "LAST_VALUE",
    "LEAD",
    "LEN",
    "LOG",
    "LOG10",
    "LOWER",
    "LTRIM",
    "MAX",
    "MIN",
    "MONTH",
    "NEWID",
    "NTILE",
    "OBJECT_ID",
    "OBJECT_NAME",
    "PARSE",
    "PATINDEX",
    "PERCENT_RANK",
    "PI",
    "POWER",
    "QUOTENAME",
    "RADIANS",
    "RAND",
    "RANK",
    "REPLACE",
    "REPLICATE",
    "REVERSE",
    "ROUND",
    "ROW_NUMBER",
    "RTRIM",
    "SCOPE_IDENTITY",
    "SIGN",
    "SIN",
    "SOUNDEX",
    "SPACE",
    "SQRT",
    "SQUARE",
    "STDEV",
    "STDEVP",
    "STR",
    "STRING_AGG",
    "STRING_SPLIT",
    "STUFF",
    "SUBSTRING",
    "SUM",
    "SUSER_NAME",
    "SUSER_SNAME",
    "SWITCHOFFSET",
    "SYSDATETIME",
    "SYSDATETIMEOFFSET",
    "SYSUTCDATETIME",
    "TAN",
    "TRANSLATE",
    "TRIM",
    "TRY_CAST",
    "TRY_PARSE",
    "UNICODE",
    "UPPER",
    "USER_ID",
    "USER_NAME",
    "VAR",
    "VARP",
    "YEAR",
];

/// `@@` system variables, upper case and sorted for binary search.
const SYSTEM_VARIABLES: &[&str] = &[
    "@@CONNECTIONS",
    "@@CPU_BUSY",
    "@@CURSOR_ROWS",
    "@@DATEFIRST",
    "@@DBTS",
    "@@ERROR",
    "@@FETCH_STATUS",
    "@@IDENTITY",
    "@@IDLE",
    "@@IO_BUSY",
    "@@LANGID",
    "@@LANGUAGE",
    "@@LOCK_TIMEOUT",
    "@@MAX_CONNECTIONS",
    "@@MAX_PRECISION",
    "@@NESTLEVEL",
    "@@OPTIONS",
    "@@PACKET_ERRORS",
    "@@PACK_RECEIVED",
    "@@PACK_SENT",
    "@@PROCID",
    "@@REMSERVER",
    "@@ROWCOUNT",
    "@@SERVERNAME",
    "@@SERVICENAME",
    "@@SPID",
    "@@TEXTSIZE",
    "@@TIMETICKS",
    "@@TOTAL_ERRORS",
    "@@TOTAL_READ",
    "@@TOTAL_WRITE",
    "@@TRANCOUNT",
    "@@VERSION",
];

/// Returns true if `text` names a built-in function (case-insensitive).
#[must_use]
pub fn is_system_identifier(text: &str) -> bool {
    SYSTEM_IDENTIFIERS
        .binary_search(&text.to_ascii_uppercase().as_str())
        .is_ok()
}

/// Returns true if `text` names an `@@` system variable (case-insensitive).
#[must_use]
pub fn is_system_variable(text: &str) -> bool {
    SYSTEM_VARIABLES
        .binary_search(&text.to_ascii_uppercase().as_str())
        .is_ok()
}

/// Returns true for the currency symbols that start a money literal.
#[must_use]
pub const fn is_currency_symbol(c: char) -> bool {
    matches!(
        c,
        '$' | '£'
            | '¢'
            | '¤'
            | '¥'
            | '€'
            | '₡'
            | '₱'
            | '﷼'
            | '₩'
            | '₮'
            | '₨'
            | '₫'
            | '฿'
            | '៛'
            | '₪'
            | '₭'
            | '₦'
            | '৲'
            | '৳'
            | '﹩'
            | '₠'
            | '₢'
            | '₣'
            | '₤'
            | '₥'
            | '₧'
            | '₯'
            | '₰'
            | '＄'
            | '￠'
            | '￡'
            | '￥'
            | '￦'
    )
}
