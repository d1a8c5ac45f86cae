pub mod p001_category_content;
