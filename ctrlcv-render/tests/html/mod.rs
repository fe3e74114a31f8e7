mod crossref;
mod export;
