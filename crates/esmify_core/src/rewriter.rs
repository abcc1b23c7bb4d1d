use log::{debug, trace};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::path::Path;

use crate::{
    constants::is_relative_specifier,
    error::EsmifyError,
    index::FileIndex,
    options::ResolveOptions,
    resolver::resolve,
    types::{Rewrite, SpecKind, Specifier},
};

/// Rewrites every relative import/export specifier in `source` to its explicit form.
///
/// `file` is the path of the source relative to the root. Only the string
/// literals of rewritten specifiers are touched; they are re-emitted with
/// single quotes and every other byte of `source` is kept as is.
pub fn rewrite_source(
    file: &Path,
    source: &str,
    index: &FileIndex,
    options: &ResolveOptions,
) -> Result<Rewrite, EsmifyError> {
    let specs = specifiers_in(file, source, options)?;

    let mut code = String::with_capacity(source.len() + specs.len() * 8);
    let mut last = 0;
    let mut rewritten = 0;

    for spec in specs.iter().filter(|s| is_relative_specifier(&s.request)) {
        let explicit = resolve(file, &spec.request, index, options)?;
        if explicit != spec.request {
            rewritten += 1;
        }
        trace!("{:?} '{}' -> '{}' in {}", spec.kind, spec.request, explicit, file.display());

        let (start, end) = (spec.span.start as usize, spec.span.end as usize);
        code.push_str(&source[last..start]);
        code.push_str(&single_quoted(&explicit));
        last = end;
    }
    code.push_str(&source[last..]);

    debug!("Rewrote {} specifiers in {}", rewritten, file.display());
    Ok(Rewrite { code, rewritten })
}

/// Parses `source` and returns the specifiers of its import and re-export
/// declarations in source order.
pub fn specifiers_in(
    file: &Path,
    source: &str,
    options: &ResolveOptions,
) -> Result<Vec<Specifier>, EsmifyError> {
    trace!("Parsing file for specifiers: {}", file.display());
    let st = source_type_for(file, options);
    let allocator = Allocator::default();
    let ParserReturn { program, errors, .. } = OxcParser::new(&allocator, source, st).parse();

    if !errors.is_empty() {
        let message = errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ");
        return Err(EsmifyError::Parse { file: file.display().to_string(), message });
    }

    let mut specs = Vec::new();
    for stmt in &program.body {
        let (literal, kind) = match stmt {
            Statement::ImportDeclaration(decl) => (&decl.source, SpecKind::Import),
            Statement::ExportNamedDeclaration(decl) => match &decl.source {
                Some(from) => (from, SpecKind::ExportNamed),
                // `export { a }` / `export const a = 1`
                None => continue,
            },
            Statement::ExportAllDeclaration(decl) => (&decl.source, SpecKind::ExportAll),
            _ => continue,
        };
        specs.push(Specifier { request: literal.value.to_string(), kind, span: literal.span });
    }

    debug!("Found {} specifiers in {}", specs.len(), file.display());
    Ok(specs)
}

fn source_type_for(path: &Path, options: &ResolveOptions) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    SourceType::default()
        .with_module(true)
        .with_typescript(options.typescript)
        .with_jsx(!options.typescript || matches!(ext, Some("tsx") | Some("jsx")))
}

fn single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileEntry;
    use std::path::PathBuf;

    fn index_of(paths: &[&str], options: &ResolveOptions) -> FileIndex {
        let entries = paths
            .iter()
            .map(|p| FileEntry {
                path: PathBuf::from(p),
                full_path: PathBuf::from("/project").join(p),
                is_dir: false,
                is_file: true,
            })
            .collect();
        FileIndex::from_entries(entries, options)
    }

    fn rewrite_js(paths: &[&str], source: &str) -> Rewrite {
        let opts = ResolveOptions::new("js", false);
        let index = index_of(paths, &opts);
        rewrite_source(Path::new("main.js"), source, &index, &opts).unwrap()
    }

    #[test]
    fn test_static_imports_rewritten() {
        let out = rewrite_js(
            &["main.js", "foo.js", "lib/index.js"],
            "import foo from \"./foo\";\nimport * as lib from './lib';\nimport './foo';\n",
        );
        assert_eq!(
            out.code,
            "import foo from './foo.js';\nimport * as lib from './lib/index.js';\nimport './foo.js';\n"
        );
        assert_eq!(out.rewritten, 3);
    }

    #[test]
    fn test_named_reexport_rewritten() {
        let out = rewrite_js(&["main.js", "foo.js"], "export { a, b as c } from './foo';");
        assert_eq!(out.code, "export { a, b as c } from './foo.js';");
    }

    #[test]
    fn test_local_export_untouched() {
        let source = "const a = 1;\nexport { a };\nexport const b = \"./foo\";\n";
        let out = rewrite_js(&["main.js"], source);
        assert_eq!(out.code, source);
        assert_eq!(out.rewritten, 0);
    }

    #[test]
    fn test_wildcard_reexports_rewritten() {
        let out = rewrite_js(
            &["main.js", "foo.js", "bar/index.js"],
            "export * from './foo';\nexport * as bar from './bar';",
        );
        assert_eq!(out.code, "export * from './foo.js';\nexport * as bar from './bar/index.js';");
    }

    #[test]
    fn test_bare_specifiers_untouched() {
        let source = "import _ from \"lodash\";\nimport fs from \"node:fs\";\nexport * from \"@scope/pkg\";\n";
        let out = rewrite_js(&["main.js"], source);
        assert_eq!(out.code, source);
        assert_eq!(out.rewritten, 0);
    }

    #[test]
    fn test_dynamic_import_untouched() {
        let source = "const m = await import('./foo');\n";
        let out = rewrite_js(&["main.js"], source);
        assert_eq!(out.code, source);
    }

    #[test]
    fn test_formatting_preserved() {
        let source = "// header\nimport   {\n  a,\n  b,\n} from   './foo'   ;\n\nfunction f() {   return a+b }\n";
        let out = rewrite_js(&["main.js", "foo.js"], source);
        assert_eq!(
            out.code,
            "// header\nimport   {\n  a,\n  b,\n} from   './foo.js'   ;\n\nfunction f() {   return a+b }\n"
        );
    }

    #[test]
    fn test_explicit_specifier_normalized_to_single_quotes() {
        let out = rewrite_js(&["main.js", "foo.js"], "import foo from \"./foo.js\";");
        assert_eq!(out.code, "import foo from './foo.js';");
        assert_eq!(out.rewritten, 0);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let paths = ["main.js", "foo.js", "lib/index.js"];
        let first = rewrite_js(&paths, "import a from './foo';\nexport * from './lib';\n");
        let second = rewrite_js(&paths, &first.code);
        assert_eq!(first.code, second.code);
        assert_eq!(second.rewritten, 0);
    }

    #[test]
    fn test_jsx_parsed_in_javascript_mode() {
        let out = rewrite_js(
            &["main.js", "Button.js"],
            "import Button from './Button';\nexport const App = () => <Button />;\n",
        );
        assert!(out.code.starts_with("import Button from './Button.js';"));
    }

    #[test]
    fn test_typescript_mode() {
        let opts = ResolveOptions::new("js", true);
        let index = index_of(&["main.ts", "types.ts", "util.ts"], &opts);
        let source = "import type { T } from './types';\nimport { u } from './util.js';\nexport type { T } from './types';\nconst x: number = 1;\n";
        let out = rewrite_source(Path::new("main.ts"), source, &index, &opts).unwrap();
        assert_eq!(
            out.code,
            "import type { T } from './types.js';\nimport { u } from './util.js';\nexport type { T } from './types.js';\nconst x: number = 1;\n"
        );
        assert_eq!(out.rewritten, 2);
    }

    #[test]
    fn test_unresolved_specifier_fails() {
        let opts = ResolveOptions::new("js", false);
        let index = index_of(&["main.js"], &opts);
        let err =
            rewrite_source(Path::new("main.js"), "import x from './missing';", &index, &opts)
                .unwrap_err();
        assert!(matches!(err, EsmifyError::Unresolved { ref request, .. } if request == "./missing"));
    }

    #[test]
    fn test_parse_error_reported() {
        let opts = ResolveOptions::new("js", false);
        let index = index_of(&["main.js"], &opts);
        let err = rewrite_source(Path::new("main.js"), "import { from './a';", &index, &opts)
            .unwrap_err();
        assert!(matches!(err, EsmifyError::Parse { .. }));
    }

    #[test]
    fn test_specifier_kinds() {
        let opts = ResolveOptions::new("js", false);
        let specs = specifiers_in(
            Path::new("main.js"),
            "import a from './a';\nexport { b } from './b';\nexport * from './c';\nexport const d = 1;\n",
            &opts,
        )
        .unwrap();
        let kinds: Vec<SpecKind> = specs.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SpecKind::Import, SpecKind::ExportNamed, SpecKind::ExportAll]);
        assert_eq!(specs[1].request, "./b");
    }

    #[test]
    fn test_single_quoted_escapes() {
        assert_eq!(single_quoted("./a"), "'./a'");
        assert_eq!(single_quoted("./it's"), "'./it\\'s'");
        assert_eq!(single_quoted("./a\\b"), "'./a\\\\b'");
    }
}
