/// Stylesheet for the rebuilt results page
pub const PAGE_CSS: &str = r#"
  .product-card-container {
    display: flex;
    flex-wrap: wrap;
    margin: 16px 16px;
    gap: 16px;
    justify-content: center;
  }

  .product-card {
    display: flex;
    flex-direction: column;
    border: 1px solid #ddd;
    border-radius: 8px;
    padding: 16px;
    width: 350px;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    transition: transform 0.1s ease, box-shadow 0.1s ease;
  }

  .product-card:hover {
    transform: translateY(-5px);
    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
  }

  .product-card-image-container {
    height: 200px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 16px;
    background-color: white;
  }

  .product-card img {
    max-width: 100%;
    max-height: 100%;
    object-fit: contain;
  }

  .product-info { margin-bottom: 16px; }

  .review-score-container {
    display: flex;
    align-items: center;
    gap: 4px;
    margin-bottom: 8px;
  }

  .num-ratings, .num-purchased { font-size: 0.8rem; color: gray; }
  .num-purchased { margin-left: auto; }

  .fa-pill {
    display: inline-block;
    font-size: 0.9rem;
    font-weight: bold;
    margin: 0 2px;
    padding: 4px 8px;
    border-radius: 12px;
  }
  .fa-pill.red { background-color: #ffcdd2; color: #b71c1c; }
  .fa-pill.yellow { background-color: #fff9c4; color: #f57f17; }
  .fa-pill.light-green { background-color: #e8f5e9; color: #2e7d32; }
  .fa-pill.dark-green { background-color: #a5d6a7; color: #1b5e20; }

  .product-name-container {
    height: 2.8em;
    margin-bottom: 8px;
    overflow: hidden;
  }

  .product-name {
    font-size: 1rem;
    line-height: 1.2;
    margin: 0;
    text-decoration: none;
    color: black;
  }

  .product-name:hover { color: #b65c22; }

  .price-delivery-container {
    display: flex;
    align-items: center;
    margin-top: 35px;
  }

  .price { font-size: 1.8rem; font-weight: bold; }
  .delivery-estimate { margin-left: auto; font-size: 1rem; }

  .attributes-list {
    list-style-type: none;
    padding: 0;
    margin: 8px 0 0;
    display: flex;
    flex-wrap: wrap;
    align-items: flex-start;
    gap: 8px;
  }

  .attributes-list li { display: contents; }

  .attribute-pill {
    display: inline-block;
    font-size: 11px;
    padding: 3px 6px;
    border-radius: 10px;
    background-color: #f0f0f0;
    color: #333;
  }
"#;
