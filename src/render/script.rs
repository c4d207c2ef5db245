use crate::scan::OperatorName;

/// Python source ready to be sent to the command port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript(String);

impl GeneratedScript {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Render `["a","b"]` in declaration order.
///
/// Names come out of the scanner as identifiers, so nothing is escaped.
pub fn operator_list_literal(operators: &[OperatorName]) -> String {
    let quoted: Vec<String> = operators.iter().map(|op| format!("\"{}\"", op)).collect();
    format!("[{}]", quoted.join(","))
}

/// Build the script that points every Splice node whose entry operator is
/// declared in `file_path` back at that file.
///
/// The path is embedded verbatim. We avoid `format!()` because the template
/// carries literal `{}` for the JSON payload built on the Maya side. The pieces
/// are concatenated once, so substituted text is never searched again.
pub fn render_reload_script(file_path: &str, operators: &[OperatorName]) -> GeneratedScript {
    const HEAD: &str = r#"import pymel.core as pm
import json
nodes = pm.ls(type="spliceMayaNode")
for node in nodes:
    datadict = json.loads(node.saveData.get())
    entry_operator = datadict['nodes'][0]['bindings'][0]['operator']['entry']
    if entry_operator in "#;
    const MID: &str = r#":
        jsonstr = '{"opName": "'+entry_operator+'", "fileName": ""#;
    const TAIL: &str = r#""}'
        pm.fabricSplice('setKLOperatorFile', node, jsonstr)
"#;

    let list = operator_list_literal(operators);
    let mut script =
        String::with_capacity(HEAD.len() + list.len() + MID.len() + file_path.len() + TAIL.len());
    script.push_str(HEAD);
    script.push_str(&list);
    script.push_str(MID);
    script.push_str(file_path);
    script.push_str(TAIL);
    GeneratedScript(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ops(names: &[&str]) -> Vec<OperatorName> {
        names.iter().map(|n| OperatorName::new(*n)).collect()
    }

    #[test]
    fn list_literal_keeps_order() {
        assert_eq!(operator_list_literal(&ops(&["foo", "bar"])), r#"["foo","bar"]"#);
        assert_eq!(operator_list_literal(&[]), "[]");
    }

    #[test]
    fn script_embeds_path_and_names() {
        let script = render_reload_script("/tmp/test.kl", &ops(&["foo", "bar"]));
        let text = script.as_str();

        assert!(text.contains(r#""fileName": "/tmp/test.kl""#));
        let membership: Vec<&str> = text.lines().filter(|l| l.contains("entry_operator in")).collect();
        assert_eq!(membership, vec![r#"    if entry_operator in ["foo","bar"]:"#]);
    }

    #[test]
    fn names_and_paths_that_look_like_markers_are_kept_verbatim() {
        let script = render_reload_script("/tmp/__OPERATORS__.kl", &ops(&["__FILE_PATH__", "foo"]));
        let text = script.as_str();

        let membership: Vec<&str> = text.lines().filter(|l| l.contains("entry_operator in")).collect();
        assert_eq!(membership, vec![r#"    if entry_operator in ["__FILE_PATH__","foo"]:"#]);
        assert!(text.contains(r#""fileName": "/tmp/__OPERATORS__.kl""#));
    }

    #[test]
    fn full_script_layout() {
        let script = render_reload_script("/tmp/test.kl", &ops(&["foo"]));
        let expected = r#"import pymel.core as pm
import json
nodes = pm.ls(type="spliceMayaNode")
for node in nodes:
    datadict = json.loads(node.saveData.get())
    entry_operator = datadict['nodes'][0]['bindings'][0]['operator']['entry']
    if entry_operator in ["foo"]:
        jsonstr = '{"opName": "'+entry_operator+'", "fileName": "/tmp/test.kl"}'
        pm.fabricSplice('setKLOperatorFile', node, jsonstr)
"#;
        assert_eq!(script.as_str(), expected);
    }

    #[test]
    fn script_queries_splice_nodes() {
        let text = render_reload_script("/tmp/test.kl", &[]).as_str().to_string();
        assert!(text.contains(r#"pm.ls(type="spliceMayaNode")"#));
        assert!(text.contains("['nodes'][0]['bindings'][0]['operator']['entry']"));
        assert!(text.contains("pm.fabricSplice('setKLOperatorFile', node, jsonstr)"));
        assert!(text.contains("if entry_operator in []:"));
    }

    #[test]
    fn path_is_not_escaped() {
        let script = render_reload_script(r"C:\kl\ops.kl", &ops(&["a"]));
        assert!(script.as_str().contains(r#""fileName": "C:\kl\ops.kl""#));
    }

    #[test]
    fn identical_inputs_render_identical_bytes() {
        let a = render_reload_script("/tmp/test.kl", &ops(&["foo", "bar"]));
        let b = render_reload_script("/tmp/test.kl", &ops(&["foo", "bar"]));
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
