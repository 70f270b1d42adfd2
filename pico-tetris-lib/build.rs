use std::{env, fs, path::Path};

use quote::{format_ident, quote};

#[path = "src/shape.rs"]
mod shape;

use shape::Shape;

// `@` is the pivot every rotation turns around, `#` the other three cells.
// Column order is the catalog order: I J L Z S O T.
const PIECES_TXT: &str = "
    |#  |  #|## | ##|##| #
##@#|#@#|#@#| @#|#@ |#@|#@#
";

const KINDS: [&str; 7] = ["I", "J", "L", "Z", "S", "O", "T"];

struct CatalogExt {
    pieces: Vec<(&'static str, Shape)>,
}

impl quote::ToTokens for CatalogExt {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let pieces: Vec<_> = self
            .pieces
            .iter()
            .map(|(kind, shape)| {
                let kind = format_ident!("{}", kind);
                // One quarter turn fewer than there are distinct orientations:
                // the turn after the last one snaps back to the catalog shape.
                let rotations = shape.orientations() - 1;
                let offsets = shape.offsets.iter().map(|o| {
                    let (x, y) = (o.x, o.y);
                    quote! { Offset { x: #x, y: #y } }
                });
                quote! {
                    PieceDef {
                        kind: PieceKind::#kind,
                        shape: Shape { offsets: [#(#offsets),*] },
                        rotations: #rotations,
                    }
                }
            })
            .collect();

        tokens.extend(quote! { #(#pieces),* });
    }
}

fn split_pieces_txt(text: &str) -> Vec<String> {
    let mut pieces_txt: Vec<String> = Vec::new();
    for (idx, line) in text.trim_matches('\n').lines().enumerate() {
        if idx == 0 {
            pieces_txt.extend(line.split('|').map(|s| s.to_string()));
        } else {
            line.split('|').enumerate().for_each(|(idx, part)| {
                pieces_txt[idx].push('\n');
                pieces_txt[idx].push_str(part);
            });
        }
    }
    pieces_txt
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("catalog.rs");

    let art = split_pieces_txt(PIECES_TXT);
    assert_eq!(art.len(), KINDS.len(), "one column of art per piece kind");

    let catalog = CatalogExt {
        pieces: KINDS
            .iter()
            .zip(art.iter())
            .map(|(kind, art)| (*kind, Shape::from_str(art)))
            .collect(),
    };

    let count = KINDS.len();
    let code = quote! { const CATALOG: [PieceDef; #count] = [ #catalog ]; }.to_string();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/shape.rs");

    let file = syn::parse_file(&code).unwrap();
    fs::write(&dest_path, prettyplease::unparse(&file)).unwrap();
}
