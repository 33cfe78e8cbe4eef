//! End-to-end extraction through the `docmd` binary

use serde_json::json;

use crate::common::{assert_categories, keys_at, parse_json, TestRepo};

const SAMPLE: &str = r#"
export declare class Widget {
    /** :docmd hello */
    x: number;
}
export declare enum Color {
    Red = "r"
}
export declare function f(n: number): void;
"#;

#[test]
fn test_minimal_declaration_file() {
    let repo = TestRepo::new();
    repo.add_declarations("sample", SAMPLE);

    repo.run_cli_success(&["sample"]);

    let output = repo.read_output("sample").expect("output should be written");
    assert_categories(&output);

    let value = parse_json(&output);
    assert_eq!(
        value["class"]["Widget"]["fields"]["x"],
        json!({ "doc": "hello", "type": "number" })
    );
    assert_eq!(
        value["enum"]["Color"]["keys"]["Red"],
        json!({ "doc": "", "value": "r" })
    );
    assert_eq!(
        value["functions"]["f"],
        json!({
            "doc": "",
            "arguments": [{ "name": "n", "type": "number" }],
            "return": "void"
        })
    );
}

#[test]
fn test_output_is_two_space_pretty_json() {
    let repo = TestRepo::new();
    repo.add_declarations("empty", "");

    repo.run_cli_success(&["empty"]);

    let output = repo.read_output("empty").unwrap();
    assert_eq!(
        output,
        "{\n  \"class\": {},\n  \"interface\": {},\n  \"enum\": {},\n  \"functions\": {}\n}"
    );
}

#[test]
fn test_base_path_in_subdirectory() {
    let repo = TestRepo::new();
    repo.add_declarations("types/index", "export interface Page { title: string; }");

    repo.run_cli_success(&["types/index"]);

    let value = parse_json(&repo.read_output("types/index").unwrap());
    assert_eq!(value["interface"]["Page"]["fields"]["title"]["type"], "string");
    assert!(repo.path().join("types/index.d.json").exists());
}

#[test]
fn test_declaration_order_is_preserved() {
    let repo = TestRepo::new();
    repo.add_declarations(
        "order",
        r#"
declare function zeta(): void;
declare function alpha(): void;
declare function mid(): void;
"#,
    );

    repo.run_cli_success(&["order"]);

    let value = parse_json(&repo.read_output("order").unwrap());
    assert_eq!(keys_at(&value, "/functions"), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_duplicate_names_last_write_wins() {
    let repo = TestRepo::new();
    repo.add_declarations(
        "dup",
        r#"
interface Settings { theme: string; legacy: boolean; }
interface Settings { theme: string; }
"#,
    );

    repo.run_cli_success(&["dup"]);

    let value = parse_json(&repo.read_output("dup").unwrap());
    assert_eq!(keys_at(&value, "/interface/Settings/fields"), vec!["theme"]);
}

#[test]
fn test_marker_from_flag_and_env() {
    let repo = TestRepo::new();
    repo.add_declarations(
        "marked",
        r#"
/** doc: from custom marker */
declare function a(): void;
/** :docmd from default marker */
declare function b(): void;
"#,
    );

    repo.run_cli_success(&["--marker", "doc:", "marked"]);
    let value = parse_json(&repo.read_output("marked").unwrap());
    assert_eq!(value["functions"]["a"]["doc"], "from custom marker");
    assert_eq!(value["functions"]["b"]["doc"], "");

    let output = repo
        .run_cli_with_env(&["marked"], &[("DOCMD_MARKER", "doc:")])
        .unwrap();
    assert!(output.status.success());
    let value = parse_json(&repo.read_output("marked").unwrap());
    assert_eq!(value["functions"]["a"]["doc"], "from custom marker");

    repo.run_cli_success(&["marked"]);
    let value = parse_json(&repo.read_output("marked").unwrap());
    assert_eq!(value["functions"]["a"]["doc"], "");
    assert_eq!(value["functions"]["b"]["doc"], "from default marker");
}

#[test]
fn test_stdout_is_empty_on_success() {
    let repo = TestRepo::new();
    repo.add_declarations("quiet", "declare function q(): void;");

    let output = repo.run_cli(&["quiet"]).unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_print_ast_goes_to_stderr() {
    let repo = TestRepo::new();
    repo.add_declarations("ast", "declare function q(): void;");

    let stderr = repo.run_cli_success(&["--print-ast", "ast"]);
    assert!(stderr.contains("=== AST for"));
    assert!(stderr.contains("function_signature"));
}

#[test]
fn test_realistic_library_typings() {
    let repo = TestRepo::new();
    repo.add_declarations(
        "http",
        r#"
/** :docmd HTTP verbs */
export declare enum Method {
    /** :docmd Read */
    Get = "GET",
    Post = "POST",
}

export interface RequestOptions {
    /**
     * :docmd Request timeout
     * in milliseconds
     * @default 3000
     */
    timeout?: number;
    headers: Record<string, string>;
    /** :docmd Called on every retry */
    onRetry(attempt: number, error: Error): void;
}

export declare class Client {
    /** :docmd Base URL */
    readonly baseUrl: string;
    constructor(baseUrl: string);
    /** :docmd Sends a request */
    request<T>(method: Method, path: string, options?: RequestOptions): Promise<T>;
    close(): void;
}

/** :docmd Creates a client */
export declare function createClient(baseUrl: string, { retries }: { retries: number }): Client;
"#,
    );

    repo.run_cli_success(&["http"]);
    let value = parse_json(&repo.read_output("http").unwrap());

    assert_eq!(
        value["enum"]["Method"]["keys"],
        json!({
            "Get": { "doc": "Read", "value": "GET" },
            "Post": { "doc": "", "value": "POST" }
        })
    );

    let options = &value["interface"]["RequestOptions"];
    assert_eq!(
        options["fields"]["timeout"],
        json!({ "doc": "Request timeout\nin milliseconds", "type": "number" })
    );
    assert_eq!(options["fields"]["headers"]["type"], "Record<string, string>");
    assert_eq!(
        options["methods"]["onRetry"],
        json!({
            "doc": "Called on every retry",
            "arguments": [
                { "name": "attempt", "type": "number" },
                { "name": "error", "type": "Error" }
            ],
            "return": "void"
        })
    );

    let client = &value["class"]["Client"];
    assert_eq!(keys_at(client, "/methods"), vec!["request", "close"]);
    assert_eq!(client["fields"]["baseUrl"]["doc"], "Base URL");
    assert_eq!(client["methods"]["request"]["return"], "Promise<T>");
    assert_eq!(
        client["methods"]["request"]["arguments"],
        json!([
            { "name": "method", "type": "Method" },
            { "name": "path", "type": "string" },
            { "name": "options", "type": "RequestOptions" }
        ])
    );

    assert_eq!(
        value["functions"],
        json!({
            "createClient": {
                "doc": "Creates a client",
                "arguments": [{ "name": "baseUrl", "type": "string" }],
                "return": "Client"
            }
        })
    );
}
